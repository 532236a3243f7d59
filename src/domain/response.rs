#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful outcome of a send request.
pub struct SendSmsResponse {
    /// Remaining account credit as reported by the gateway, possibly with the
    /// API status line appended (see [`SmsPilotClientBuilder::hide_api_status`]).
    ///
    /// [`SmsPilotClientBuilder::hide_api_status`]: crate::SmsPilotClientBuilder::hide_api_status
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Successful outcome of a balance request.
pub struct BalanceResponse {
    /// Remaining account credit as reported by the gateway.
    pub balance: Option<String>,
}
