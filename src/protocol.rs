//! Public protocol structs for WebSocket sessions and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::session::navigation::Tab;
use crate::session::SessionSnapshot;

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    Snapshot,
    SelectTab {
        tab: Tab,
    },
    SelectLevel {
        level: String,
    },
    CompleteLesson,
    SelectLessonAnswer {
        option: usize,
    },
    ExitToLevelSelect,
    LoadQuizzes {
        #[serde(default)]
        category: Option<String>,
        #[serde(default)]
        difficulty: Option<String>,
    },
    SelectQuizAnswer {
        option: usize,
    },
    NextQuestion,
    ResetQuiz,
    ToggleRiddle {
        #[serde(rename = "riddleId")]
        riddle_id: String,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    Session {
        snapshot: SessionSnapshot,
    },
    Error {
        message: String,
    },
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct QuizQuery {
    pub category: Option<String>,
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StoryQuery {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LearningQuery {
    pub level: Option<String>,
    pub category: Option<String>,
}

/// Body of every non-2xx JSON response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageOut {
    pub message: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_parse() {
        let m: ClientWsMessage =
            serde_json::from_str(r#"{"type":"select_tab","tab":"stories"}"#).expect("parse");
        assert!(matches!(m, ClientWsMessage::SelectTab { tab: Tab::Stories }));

        let m: ClientWsMessage =
            serde_json::from_str(r#"{"type":"toggle_riddle","riddleId":"1"}"#).expect("parse");
        assert!(matches!(m, ClientWsMessage::ToggleRiddle { ref riddle_id } if riddle_id == "1"));

        let m: ClientWsMessage = serde_json::from_str(r#"{"type":"load_quizzes"}"#).expect("parse");
        assert!(matches!(
            m,
            ClientWsMessage::LoadQuizzes { category: None, difficulty: None }
        ));
    }

    #[test]
    fn unknown_tab_is_rejected() {
        assert!(serde_json::from_str::<ClientWsMessage>(r#"{"type":"select_tab","tab":"admin"}"#).is_err());
    }

    #[test]
    fn error_message_shape() {
        let v = serde_json::to_value(ServerWsMessage::Error { message: "x".into() }).expect("json");
        assert_eq!(v, serde_json::json!({ "type": "error", "message": "x" }));
    }
}
