/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks`.
///
/// Optional fields are sent as empty strings, never omitted. Field order
/// is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub name: String,
    pub deadline_date: String,
    pub deadline_time: String,
    pub attachment_link: String,
    pub submit_link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_task_request_wire_format() {
        let req = CreateTaskRequest {
            name: "UTS SDA".to_string(),
            deadline_date: "2024-06-01".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&req).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"UTS SDA","deadlineDate":"2024-06-01","deadlineTime":"","attachmentLink":"","submitLink":""}"#
        );
    }
}
