//! reqwest-backed adapters for the room API.

pub mod member_api;
pub mod rtc_config_api;

pub use member_api::HttpMemberSource;
pub use rtc_config_api::HttpRtcConfigSource;

/// Join the API base URL and a path without doubling the slash
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        // テスト項目: ベース URL 末尾のスラッシュが重複しない
        // given (前提条件):
        let base = "http://127.0.0.1:8080/";

        // when (操作):
        let url = endpoint(base, "/api/rooms/1/members");

        // then (期待する結果):
        assert_eq!(url, "http://127.0.0.1:8080/api/rooms/1/members");
    }
}
