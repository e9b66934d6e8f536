//! In-memory collaborators for tests.
//!
//! `FakeTypes` knows a handful of extensions and a small conformance tree.
//! `FakeRegistry` records every binding and lets a test choose how each OS
//! call behaves (succeed, fail with a status, fail asynchronously, or never
//! complete).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use super::{AssociationRegistry, Completion, OsError, OsStatus, Role, TypeSystem};

/// Type system with a fixed extension table and parent links
pub struct FakeTypes {
    extensions: HashMap<String, String>,
    parents: HashMap<String, Vec<String>>,
    mime: HashMap<String, String>,
    undeclared: HashSet<String>,
}

impl FakeTypes {
    /// A type system that knows common image, text and archive types
    pub fn standard() -> Self {
        let mut types = Self {
            extensions: HashMap::new(),
            parents: HashMap::new(),
            mime: HashMap::new(),
            undeclared: HashSet::new(),
        };
        types
            .with_extension("png", "public.png", &["public.image"])
            .with_extension("jpg", "public.jpeg", &["public.image"])
            .with_extension("jpeg", "public.jpeg", &["public.image"])
            .with_extension("gif", "com.compuserve.gif", &["public.image"])
            .with_extension("txt", "public.plain-text", &["public.text"])
            .with_extension("md", "net.daringfireball.markdown", &["public.plain-text"])
            .with_extension("zip", "public.zip-archive", &["public.archive"])
            .with_extension("rs", "public.rust-source", &["public.source-code"]);
        types.link("public.image", &["public.data", "public.content"]);
        types.link("public.text", &["public.data", "public.content"]);
        types.link("public.source-code", &["public.plain-text"]);
        types.link("public.archive", &["public.data"]);
        types.mime.insert("public.png".into(), "image/png".into());
        types.mime.insert("public.jpeg".into(), "image/jpeg".into());
        types
    }

    pub fn with_extension(&mut self, extension: &str, identifier: &str, parents: &[&str]) -> &mut Self {
        self.extensions
            .insert(extension.to_string(), identifier.to_string());
        self.link(identifier, parents);
        self
    }

    /// Mark an identifier as unknown to this "OS version"
    pub fn undeclare(&mut self, identifier: &str) -> &mut Self {
        self.undeclared.insert(identifier.to_string());
        self
    }

    fn link(&mut self, identifier: &str, parents: &[&str]) {
        self.parents
            .entry(identifier.to_string())
            .or_default()
            .extend(parents.iter().map(|p| (*p).to_string()));
    }
}

impl TypeSystem for FakeTypes {
    fn identifier_for_extension(&self, extension: &str) -> Option<String> {
        self.extensions.get(extension).cloned()
    }

    fn is_declared(&self, identifier: &str) -> bool {
        !self.undeclared.contains(identifier)
            && (identifier.starts_with("public.")
                || identifier.starts_with("com.")
                || identifier.starts_with("net.")
                || identifier.starts_with("org."))
    }

    fn conforms_to(&self, identifier: &str, parent: &str) -> bool {
        if identifier == parent {
            return true;
        }
        self.parents
            .get(identifier)
            .is_some_and(|parents| parents.iter().any(|p| self.conforms_to(p, parent)))
    }

    fn preferred_mime_type(&self, identifier: &str) -> Option<String> {
        self.mime.get(identifier).cloned()
    }
}

/// How the fake answers the modern content type call
#[derive(Debug, Clone)]
pub enum ModernBehavior {
    Succeed,
    Fail(OsError),
    /// Completes from another thread after the delay
    SucceedAfter(Duration),
    /// Holds on to the completion and never calls it
    Hang,
}

/// Everything the fake registry has been asked to do
#[derive(Debug, Default)]
pub struct RegistryState {
    /// identifier -> application path, set through the modern call
    pub type_defaults: HashMap<String, PathBuf>,
    /// (identifier, role mask) -> bundle id, set through the legacy call
    pub role_handlers: HashMap<(String, u32), String>,
    /// scheme -> bundle id
    pub scheme_handlers: HashMap<String, String>,
    pub registered: Vec<PathBuf>,
    /// Every call in order, e.g. `register:/Applications/Safari.app`
    pub calls: Vec<String>,
}

pub struct FakeRegistry {
    pub state: Mutex<RegistryState>,
    modern: Mutex<ModernBehavior>,
    register_status: Mutex<OsStatus>,
    scheme_status: Mutex<OsStatus>,
    role_status: Mutex<OsStatus>,
    parked: Mutex<Vec<Completion>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(RegistryState::default()),
            modern: Mutex::new(ModernBehavior::Succeed),
            register_status: Mutex::new(0),
            scheme_status: Mutex::new(0),
            role_status: Mutex::new(0),
            parked: Mutex::new(Vec::new()),
        }
    }

    pub fn with_modern(self, behavior: ModernBehavior) -> Self {
        *self.modern.lock().unwrap() = behavior;
        self
    }

    pub fn with_register_status(self, status: OsStatus) -> Self {
        *self.register_status.lock().unwrap() = status;
        self
    }

    pub fn with_scheme_status(self, status: OsStatus) -> Self {
        *self.scheme_status.lock().unwrap() = status;
        self
    }

    pub fn with_role_status(self, status: OsStatus) -> Self {
        *self.role_status.lock().unwrap() = status;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn type_default(&self, identifier: &str) -> Option<PathBuf> {
        self.state.lock().unwrap().type_defaults.get(identifier).cloned()
    }

    pub fn scheme_handler(&self, scheme: &str) -> Option<String> {
        self.state.lock().unwrap().scheme_handlers.get(scheme).cloned()
    }

    pub fn role_handler(&self, identifier: &str, role: Role) -> Option<String> {
        self.state
            .lock()
            .unwrap()
            .role_handlers
            .get(&(identifier.to_string(), role.mask()))
            .cloned()
    }

    fn record(&self, call: String) {
        self.state.lock().unwrap().calls.push(call);
    }
}

impl AssociationRegistry for FakeRegistry {
    fn set_default_application(&self, app: &Path, identifier: &str, completion: Completion) {
        self.record(format!("modern:{identifier}:{}", app.display()));
        let behavior = self.modern.lock().unwrap().clone();
        match behavior {
            ModernBehavior::Succeed => {
                self.state
                    .lock()
                    .unwrap()
                    .type_defaults
                    .insert(identifier.to_string(), app.to_path_buf());
                completion(Ok(()));
            }
            ModernBehavior::Fail(error) => completion(Err(error)),
            ModernBehavior::SucceedAfter(delay) => {
                self.state
                    .lock()
                    .unwrap()
                    .type_defaults
                    .insert(identifier.to_string(), app.to_path_buf());
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    completion(Ok(()));
                });
            }
            ModernBehavior::Hang => self.parked.lock().unwrap().push(completion),
        }
    }

    fn set_default_role_handler(&self, identifier: &str, role: Role, bundle_id: &str) -> OsStatus {
        self.record(format!("role:{identifier}:{bundle_id}"));
        let status = *self.role_status.lock().unwrap();
        if status == 0 {
            self.state
                .lock()
                .unwrap()
                .role_handlers
                .insert((identifier.to_string(), role.mask()), bundle_id.to_string());
        }
        status
    }

    fn register_application(&self, app: &Path) -> OsStatus {
        self.record(format!("register:{}", app.display()));
        let status = *self.register_status.lock().unwrap();
        if status == 0 {
            let mut state = self.state.lock().unwrap();
            if !state.registered.iter().any(|p| p == app) {
                state.registered.push(app.to_path_buf());
            }
        }
        status
    }

    fn set_default_scheme_handler(&self, scheme: &str, bundle_id: &str) -> OsStatus {
        self.record(format!("scheme:{scheme}:{bundle_id}"));
        let status = *self.scheme_status.lock().unwrap();
        if status == 0 {
            self.state
                .lock()
                .unwrap()
                .scheme_handlers
                .insert(scheme.to_string(), bundle_id.to_string());
        }
        status
    }

    fn default_handler_for_type(&self, identifier: &str) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .role_handlers
            .iter()
            .find(|((id, _), _)| id == identifier)
            .map(|(_, bundle)| bundle.clone())
    }

    fn handlers_for_type(&self, identifier: &str) -> Vec<String> {
        self.default_handler_for_type(identifier).into_iter().collect()
    }

    fn default_handler_for_scheme(&self, scheme: &str) -> Option<String> {
        self.scheme_handler(scheme)
    }

    fn handlers_for_scheme(&self, scheme: &str) -> Vec<String> {
        self.scheme_handler(scheme).into_iter().collect()
    }
}

/// Write a minimal application bundle with an XML `Info.plist`
pub fn write_app_bundle(dir: &Path, file_name: &str, bundle_id: &str) -> PathBuf {
    write_named_app_bundle(dir, file_name, file_name.trim_end_matches(".app"), bundle_id)
}

/// Like [`write_app_bundle`], with a `CFBundleName` that may differ from the folder name
pub fn write_named_app_bundle(
    dir: &Path,
    file_name: &str,
    display_name: &str,
    bundle_id: &str,
) -> PathBuf {
    let bundle = dir.join(file_name);
    let contents = bundle.join("Contents");
    std::fs::create_dir_all(&contents).unwrap();
    let plist = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
<dict>
    <key>CFBundleIdentifier</key>
    <string>{bundle_id}</string>
    <key>CFBundleName</key>
    <string>{display_name}</string>
    <key>CFBundlePackageType</key>
    <string>APPL</string>
    <key>CFBundleShortVersionString</key>
    <string>1.0</string>
</dict>
</plist>
"#
    );
    std::fs::write(contents.join("Info.plist"), plist).unwrap();
    bundle
}
