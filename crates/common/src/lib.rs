//! Pieces shared by the server and the utility binaries: logging setup,
//! small response types and runtime environment checks.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn detail_serializes_as_detail_field() {
        let body = serde_json::to_value(types::Detail::new("Term not found")).unwrap();
        assert_eq!(body, serde_json::json!({"detail": "Term not found"}));
    }

    #[test]
    fn message_serializes_as_message_field() {
        let body = serde_json::to_value(types::Message::new("Term deleted")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Term deleted"}));
    }
}
