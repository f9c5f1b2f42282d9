//! End-to-end session lifecycle: login persistence, guarded entry,
//! expiry teardown, and the file-backed store across restarts.

use std::sync::{Arc, Mutex};

use assert_matches::assert_matches;
use chrono::Utc;

use campus_core::error::SessionError;
use campus_core::identity::{AdminProfile, Identity};
use campus_core::roles::Role;
use campus_session::guard::{Navigator, SessionGuard};
use campus_session::store::{write_session, FileStore, MemoryStore, SessionStore};
use campus_session::token::{encode_unsigned, Claims};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Recorder {
    fn paths(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, path: &str) {
        self.0.lock().unwrap().push(path.to_string());
    }
}

fn admin_identity() -> Identity {
    Identity::Admin(AdminProfile {
        id: 7,
        name: "Head Admin".to_string(),
        email: "admin@school.example".to_string(),
    })
}

fn admin_token(exp: i64) -> String {
    let claims = Claims {
        exp,
        iat: Some(exp - 7200),
        identity: admin_identity(),
    };
    encode_unsigned(&claims).expect("claims encode")
}

#[test]
fn login_then_enter_protected_view() {
    let store = MemoryStore::new();
    let token = admin_token(Utc::now().timestamp() + 7200);
    let identity_json = serde_json::to_string(&admin_identity()).unwrap();

    // What the client does after a successful login call.
    write_session(&store, Role::Admin, &token, &identity_json, Utc::now()).unwrap();

    let recorder = Recorder::default();
    let guard = SessionGuard::new(Role::Admin, store, recorder.clone());

    let session = guard.check().expect("fresh login should pass the guard");
    assert_eq!(session.identity, admin_identity());
    assert!(session.expiry.hours_left() >= 1);
    assert!(recorder.paths().is_empty());
}

#[test]
fn expired_session_is_torn_down_exactly_once_per_check() {
    let store = MemoryStore::new();
    let token = admin_token(Utc::now().timestamp() - 60);
    write_session(&store, Role::Admin, &token, "{}", Utc::now()).unwrap();

    let recorder = Recorder::default();
    let guard = SessionGuard::new(Role::Admin, store, recorder.clone());

    assert_matches!(guard.check(), Err(SessionError::Expired { .. }));
    assert_eq!(recorder.paths(), vec!["/admin/login".to_string()]);

    // A second check sees an empty store: different error, another redirect.
    assert_matches!(guard.check(), Err(SessionError::NotLoggedIn));
    assert_eq!(recorder.paths().len(), 2);
}

#[test]
fn file_store_survives_a_client_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let token = admin_token(Utc::now().timestamp() + 7200);

    {
        let store = FileStore::open(&path);
        write_session(&store, Role::Admin, &token, "{}", Utc::now()).unwrap();
    }

    // "Restart": reopen the file and guard straight off it.
    let recorder = Recorder::default();
    let guard = SessionGuard::new(Role::Admin, FileStore::open(&path), recorder.clone());

    let session = guard.check().expect("persisted session should still pass");
    assert_eq!(session.identity.role(), Role::Admin);
    assert!(recorder.paths().is_empty());
}

#[test]
fn file_store_teardown_is_visible_after_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    let token = admin_token(Utc::now().timestamp() - 60);

    {
        let store = FileStore::open(&path);
        write_session(&store, Role::Admin, &token, "{}", Utc::now()).unwrap();
    }

    {
        let guard = SessionGuard::new(Role::Admin, FileStore::open(&path), Recorder::default());
        assert_matches!(guard.check(), Err(SessionError::Expired { .. }));
    }

    // The cleared keys must be gone from disk too.
    let reopened = FileStore::open(&path);
    assert_eq!(reopened.get("adminToken").unwrap(), None);
    assert_eq!(reopened.get("adminData").unwrap(), None);
}
