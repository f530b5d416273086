//! WebSocket upgrade + session loop. Each connection owns one `BrowsingSession`;
//! every client message is parsed as JSON, applied to the session, and answered
//! with a single JSON message (usually the full session snapshot).

use std::sync::Arc;
use axum::{
  extract::{
    ws::{Message, WebSocket},
    State, WebSocketUpgrade,
  },
  response::IntoResponse,
};
use tracing::{debug, error, info, instrument};

use crate::logic::find_quizzes;
use crate::protocol::{ClientWsMessage, ServerWsMessage};
use crate::session::BrowsingSession;
use crate::state::AppState;
use crate::util::trunc_for_log;

#[instrument(level = "info", skip(state))]
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> impl IntoResponse {
  info!(target: "sanskriti_backend", "WebSocket upgrade requested");
  ws.on_upgrade(move |socket| handle_ws(socket, state))
}

/// Fresh session: all quizzes loaded, every riddle hidden, on the about tab.
pub fn new_session(state: &AppState) -> BrowsingSession {
  BrowsingSession::new(
    state.levels.clone(),
    find_quizzes(state, None, None),
    state.store.riddles.all(),
  )
}

#[instrument(level = "info", skip(socket, state))]
async fn handle_ws(mut socket: WebSocket, state: Arc<AppState>) {
  info!(target: "session", "WebSocket connected; session started");
  let mut session = new_session(&state);

  while let Some(Ok(msg)) = socket.recv().await {
    match msg {
      Message::Text(txt) => {
        // Parse, apply, serialize response.
        let reply_msg = match serde_json::from_str::<ClientWsMessage>(&txt) {
          Ok(incoming) => {
            debug!(target: "session", "WS received: {:?}", &incoming);
            handle_client_ws(incoming, &mut session, &state)
          }
          Err(e) => {
            debug!(target: "session", raw = %trunc_for_log(&txt, 200), error = %e, "WS invalid message");
            ServerWsMessage::Error { message: format!("Invalid JSON: {}", e) }
          }
        };

        let out = serde_json::to_string(&reply_msg).unwrap_or_else(|e| {
          serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
        });

        if let Err(e) = socket.send(Message::Text(out)).await {
          error!(target: "session", error = %e, "WS send error");
          break;
        }
      }
      Message::Ping(payload) => { let _ = socket.send(Message::Pong(payload)).await; }
      Message::Close(_) => break,
      _ => {}
    }
  }
  info!(
    target: "session",
    quiz_score = session.quiz.score(),
    active_tab = ?session.navigation.active(),
    "WebSocket disconnected; session discarded"
  );
}

/// Apply one client command to the session. Ineffective commands still reply
/// with the (unchanged) snapshot; only unknown targets are errors.
pub fn handle_client_ws(msg: ClientWsMessage, session: &mut BrowsingSession, state: &AppState) -> ServerWsMessage {
  match msg {
    ClientWsMessage::Ping => return ServerWsMessage::Pong,

    ClientWsMessage::Snapshot => {}

    ClientWsMessage::SelectTab { tab } => {
      session.navigation.select_tab(tab);
      debug!(target: "session", ?tab, "tab selected");
    }

    ClientWsMessage::SelectLevel { level } => {
      if !session.lessons.select_level(&level) {
        return ServerWsMessage::Error { message: format!("Unknown level: {}", level) };
      }
      info!(target: "session", %level, "level selected");
    }

    ClientWsMessage::CompleteLesson => {
      let applied = session.lessons.complete_lesson();
      debug!(target: "session", applied, "complete_lesson");
    }

    ClientWsMessage::SelectLessonAnswer { option } => {
      let applied = session.lessons.select_answer(option);
      debug!(target: "session", option, applied, "lesson answer");
    }

    ClientWsMessage::ExitToLevelSelect => session.lessons.exit_to_level_select(),

    ClientWsMessage::LoadQuizzes { category, difficulty } => {
      let quizzes = find_quizzes(state, category.as_deref(), difficulty.as_deref());
      info!(target: "session", count = quizzes.len(), "quiz list loaded");
      session.quiz.load(quizzes);
    }

    ClientWsMessage::SelectQuizAnswer { option } => {
      if let Some(outcome) = session.quiz.select_answer(option) {
        info!(target: "session", option, correct = outcome.correct, expected = outcome.correct_answer, score = session.quiz.score(), "quiz answer");
      }
    }

    ClientWsMessage::NextQuestion => {
      let moved = session.quiz.next_question();
      debug!(target: "session", moved, index = session.quiz.current_index(), "next_question");
    }

    ClientWsMessage::ResetQuiz => session.quiz.reset(),

    ClientWsMessage::ToggleRiddle { riddle_id } => {
      if session.toggle_riddle(&riddle_id).is_none() {
        return ServerWsMessage::Error { message: format!("Unknown riddleId: {}", riddle_id) };
      }
    }
  }
  ServerWsMessage::Session { snapshot: session.snapshot() }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::session::lessons::LessonSnapshot;
  use crate::session::navigation::Tab;

  fn setup() -> (AppState, BrowsingSession) {
    let state = AppState::from_config(None);
    let session = new_session(&state);
    (state, session)
  }

  fn snapshot(reply: ServerWsMessage) -> crate::session::SessionSnapshot {
    match reply {
      ServerWsMessage::Session { snapshot } => snapshot,
      other => panic!("expected session snapshot, got {other:?}"),
    }
  }

  #[test]
  fn ping_pongs() {
    let (state, mut s) = setup();
    assert!(matches!(handle_client_ws(ClientWsMessage::Ping, &mut s, &state), ServerWsMessage::Pong));
  }

  #[test]
  fn tab_and_lesson_flow() {
    let (state, mut s) = setup();
    let snap = snapshot(handle_client_ws(ClientWsMessage::SelectTab { tab: Tab::Learning }, &mut s, &state));
    assert_eq!(snap.active_tab, Tab::Learning);

    handle_client_ws(ClientWsMessage::SelectLevel { level: "beginner".into() }, &mut s, &state);
    for _ in 0..4 {
      handle_client_ws(ClientWsMessage::CompleteLesson, &mut s, &state);
    }
    let snap = snapshot(handle_client_ws(ClientWsMessage::Snapshot, &mut s, &state));
    match snap.lessons {
      LessonSnapshot::InLesson { lesson_index, completion, .. } => {
        assert_eq!(lesson_index, 2);
        assert_eq!(completion.get("beginner"), Some(&3));
      }
      other => panic!("unexpected {other:?}"),
    }

    let snap = snapshot(handle_client_ws(ClientWsMessage::ExitToLevelSelect, &mut s, &state));
    match snap.lessons {
      LessonSnapshot::LevelSelect { completion } => assert_eq!(completion.get("beginner"), Some(&3)),
      other => panic!("unexpected {other:?}"),
    }
  }

  #[test]
  fn unknown_level_and_riddle_are_errors() {
    let (state, mut s) = setup();
    let reply = handle_client_ws(ClientWsMessage::SelectLevel { level: "expert".into() }, &mut s, &state);
    assert!(matches!(reply, ServerWsMessage::Error { ref message } if message.contains("expert")));
    let reply = handle_client_ws(ClientWsMessage::ToggleRiddle { riddle_id: "zz".into() }, &mut s, &state);
    assert!(matches!(reply, ServerWsMessage::Error { .. }));
  }

  #[test]
  fn quiz_flow_through_commands() {
    let (state, mut s) = setup();
    let snap = snapshot(handle_client_ws(ClientWsMessage::SelectQuizAnswer { option: 0 }, &mut s, &state));
    assert_eq!(snap.quiz.score, 1);
    assert!(snap.quiz.revealed);

    let snap = snapshot(handle_client_ws(ClientWsMessage::NextQuestion, &mut s, &state));
    assert_eq!(snap.quiz.current_index, 1);
    assert!(!snap.quiz.revealed);

    let snap = snapshot(handle_client_ws(ClientWsMessage::ResetQuiz, &mut s, &state));
    assert_eq!((snap.quiz.current_index, snap.quiz.score), (0, 0));
  }

  #[test]
  fn loading_an_empty_quiz_list_makes_answers_inert() {
    let (state, mut s) = setup();
    let load = ClientWsMessage::LoadQuizzes { category: Some("cooking".into()), difficulty: None };
    let snap = snapshot(handle_client_ws(load, &mut s, &state));
    assert_eq!(snap.quiz.total, 0);
    assert!(snap.quiz.current.is_none());

    let snap = snapshot(handle_client_ws(ClientWsMessage::SelectQuizAnswer { option: 0 }, &mut s, &state));
    assert_eq!(snap.quiz.score, 0);
    assert!(!snap.quiz.revealed);
  }

  #[test]
  fn riddle_toggle_via_command() {
    let (state, mut s) = setup();
    let snap = snapshot(handle_client_ws(ClientWsMessage::ToggleRiddle { riddle_id: "1".into() }, &mut s, &state));
    assert!(snap.riddles.iter().any(|r| r.riddle_id == "1" && r.revealed));
  }
}
