/// Encode the operation-specific fields of a balance request.
///
/// The legacy `api.php` endpoint treats a request carrying only credentials
/// as a balance query, so there is nothing to add beyond the `apikey` and
/// `password` fields the client pushes.
pub fn encode_check_balance_form() -> Vec<(String, String)> {
    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_request_has_no_operation_fields() {
        assert!(encode_check_balance_form().is_empty());
    }
}
