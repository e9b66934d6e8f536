//! CoreServices and AppKit backed collaborators
//!
//! Content type questions go through the `UTType*` C functions. Writes use
//! `NSWorkspace` for the modern content type call and Launch Services for
//! everything else.

mod ffi;

use std::ffi::CStr;
use std::os::raw::c_char;
use std::path::Path;
use std::sync::Mutex;

use block::ConcreteBlock;
use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::TCFType;
use core_foundation::string::{CFString, CFStringRef};
use core_foundation::url::CFURL;
use objc::runtime::{BOOL, Class, NO, Object};
use objc::{class, msg_send, sel, sel_impl};

use super::{AssociationRegistry, Completion, OsError, OsStatus, Role, TypeSystem};

/// `paramErr`
const PARAM_ERR: OsStatus = -50;

/// Content type system backed by `UTType*`
pub struct CoreTypes;

/// Association registry backed by Launch Services and `NSWorkspace`
pub struct LaunchServices;

fn copied_string(raw: CFStringRef) -> Option<String> {
    if raw.is_null() {
        return None;
    }
    Some(unsafe { CFString::wrap_under_create_rule(raw) }.to_string())
}

fn copied_strings(raw: CFArrayRef) -> Vec<String> {
    if raw.is_null() {
        return Vec::new();
    }
    let array = unsafe { CFArray::<CFString>::wrap_under_create_rule(raw) };
    array.iter().map(|item| item.to_string()).collect()
}

/// Borrow a `CFString` as an `NSString` (toll-free bridged)
fn as_ns_string(value: &CFString) -> *mut Object {
    value.as_concrete_TypeRef() as *mut Object
}

unsafe fn ns_string_to_string(value: *mut Object) -> String {
    if value.is_null() {
        return String::new();
    }
    unsafe {
        let utf8: *const c_char = msg_send![value, UTF8String];
        if utf8.is_null() {
            String::new()
        } else {
            CStr::from_ptr(utf8).to_string_lossy().into_owned()
        }
    }
}

unsafe fn ns_error_to_os_error(error: *mut Object) -> OsError {
    unsafe {
        let domain: *mut Object = msg_send![error, domain];
        let code: isize = msg_send![error, code];
        let description: *mut Object = msg_send![error, localizedDescription];
        OsError::new(
            ns_string_to_string(domain),
            code as i64,
            ns_string_to_string(description),
        )
    }
}

fn unavailable(what: &str) -> OsError {
    OsError::new("infat", -1, format!("{what} is not available on this macOS version"))
}

impl TypeSystem for CoreTypes {
    fn identifier_for_extension(&self, extension: &str) -> Option<String> {
        let tag_class = CFString::new(ffi::K_UT_TAG_CLASS_FILENAME_EXTENSION);
        let tag = CFString::new(extension);
        let raw = unsafe {
            ffi::UTTypeCreatePreferredIdentifierForTag(
                tag_class.as_concrete_TypeRef(),
                tag.as_concrete_TypeRef(),
                std::ptr::null(),
            )
        };
        let identifier = copied_string(raw)?;

        let cf_identifier = CFString::new(&identifier);
        if unsafe { ffi::UTTypeIsDynamic(cf_identifier.as_concrete_TypeRef()) } != 0 {
            return None;
        }
        Some(identifier)
    }

    fn is_declared(&self, identifier: &str) -> bool {
        let cf_identifier = CFString::new(identifier);
        unsafe { ffi::UTTypeIsDeclared(cf_identifier.as_concrete_TypeRef()) != 0 }
    }

    fn conforms_to(&self, identifier: &str, parent: &str) -> bool {
        let cf_identifier = CFString::new(identifier);
        let cf_parent = CFString::new(parent);
        unsafe {
            ffi::UTTypeConformsTo(
                cf_identifier.as_concrete_TypeRef(),
                cf_parent.as_concrete_TypeRef(),
            ) != 0
        }
    }

    fn preferred_mime_type(&self, identifier: &str) -> Option<String> {
        let cf_identifier = CFString::new(identifier);
        let tag_class = CFString::new(ffi::K_UT_TAG_CLASS_MIME_TYPE);
        copied_string(unsafe {
            ffi::UTTypeCopyPreferredTagWithClass(
                cf_identifier.as_concrete_TypeRef(),
                tag_class.as_concrete_TypeRef(),
            )
        })
    }
}

impl AssociationRegistry for LaunchServices {
    fn set_default_application(&self, app: &Path, identifier: &str, completion: Completion) {
        let Some(url) = CFURL::from_path(app, true) else {
            completion(Err(OsError::new(
                "infat",
                i64::from(PARAM_ERR),
                format!("invalid application path: {}", app.display()),
            )));
            return;
        };
        let cf_identifier = CFString::new(identifier);

        unsafe {
            let Some(ut_type) = Class::get("UTType") else {
                completion(Err(unavailable("UTType")));
                return;
            };
            let content_type: *mut Object =
                msg_send![ut_type, typeWithIdentifier: as_ns_string(&cf_identifier)];
            if content_type.is_null() {
                completion(Err(OsError::new(
                    "infat",
                    i64::from(PARAM_ERR),
                    format!("unknown content type: {identifier}"),
                )));
                return;
            }

            let workspace: *mut Object = msg_send![class!(NSWorkspace), sharedWorkspace];
            let responds: BOOL = msg_send![
                workspace,
                respondsToSelector: sel!(setDefaultApplicationAtURL:toOpenContentType:completionHandler:)
            ];
            if responds == NO {
                completion(Err(unavailable("NSWorkspace content type binding")));
                return;
            }

            let pending = Mutex::new(Some(completion));
            let handler = ConcreteBlock::new(move |error: *mut Object| {
                let completion = pending.lock().ok().and_then(|mut slot| slot.take());
                if let Some(completion) = completion {
                    if error.is_null() {
                        completion(Ok(()));
                    } else {
                        completion(Err(ns_error_to_os_error(error)));
                    }
                }
            })
            .copy();

            let ns_url = url.as_concrete_TypeRef() as *mut Object;
            let _: () = msg_send![
                workspace,
                setDefaultApplicationAtURL: ns_url
                toOpenContentType: content_type
                completionHandler: &*handler
            ];
        }
    }

    fn set_default_role_handler(&self, identifier: &str, role: Role, bundle_id: &str) -> OsStatus {
        let cf_identifier = CFString::new(identifier);
        let cf_bundle_id = CFString::new(bundle_id);
        unsafe {
            ffi::LSSetDefaultRoleHandlerForContentType(
                cf_identifier.as_concrete_TypeRef(),
                role.mask(),
                cf_bundle_id.as_concrete_TypeRef(),
            )
        }
    }

    fn register_application(&self, app: &Path) -> OsStatus {
        let Some(url) = CFURL::from_path(app, true) else {
            return PARAM_ERR;
        };
        unsafe { ffi::LSRegisterURL(url.as_concrete_TypeRef(), 1) }
    }

    fn set_default_scheme_handler(&self, scheme: &str, bundle_id: &str) -> OsStatus {
        let cf_scheme = CFString::new(scheme);
        let cf_bundle_id = CFString::new(bundle_id);
        unsafe {
            ffi::LSSetDefaultHandlerForURLScheme(
                cf_scheme.as_concrete_TypeRef(),
                cf_bundle_id.as_concrete_TypeRef(),
            )
        }
    }

    fn default_handler_for_type(&self, identifier: &str) -> Option<String> {
        let cf_identifier = CFString::new(identifier);
        copied_string(unsafe {
            ffi::LSCopyDefaultRoleHandlerForContentType(
                cf_identifier.as_concrete_TypeRef(),
                Role::All.mask(),
            )
        })
    }

    fn handlers_for_type(&self, identifier: &str) -> Vec<String> {
        let cf_identifier = CFString::new(identifier);
        copied_strings(unsafe {
            ffi::LSCopyAllRoleHandlersForContentType(
                cf_identifier.as_concrete_TypeRef(),
                Role::All.mask(),
            )
        })
    }

    fn default_handler_for_scheme(&self, scheme: &str) -> Option<String> {
        let cf_scheme = CFString::new(scheme);
        copied_string(unsafe { ffi::LSCopyDefaultHandlerForURLScheme(cf_scheme.as_concrete_TypeRef()) })
    }

    fn handlers_for_scheme(&self, scheme: &str) -> Vec<String> {
        let cf_scheme = CFString::new(scheme);
        copied_strings(unsafe { ffi::LSCopyAllHandlersForURLScheme(cf_scheme.as_concrete_TypeRef()) })
    }
}
