//! Raw bindings to CoreServices (Launch Services and Uniform Type Identifiers)

#![allow(non_snake_case)]

use core_foundation::array::CFArrayRef;
use core_foundation::base::{Boolean, OSStatus};
use core_foundation::string::CFStringRef;
use core_foundation::url::CFURLRef;

pub const K_UT_TAG_CLASS_FILENAME_EXTENSION: &str = "public.filename-extension";
pub const K_UT_TAG_CLASS_MIME_TYPE: &str = "public.mime-type";

#[link(name = "CoreServices", kind = "framework")]
unsafe extern "C" {
    pub fn LSSetDefaultHandlerForURLScheme(
        inURLScheme: CFStringRef,
        inHandlerBundleID: CFStringRef,
    ) -> OSStatus;

    pub fn LSSetDefaultRoleHandlerForContentType(
        inContentType: CFStringRef,
        inRole: u32,
        inHandlerBundleID: CFStringRef,
    ) -> OSStatus;

    pub fn LSCopyDefaultHandlerForURLScheme(inURLScheme: CFStringRef) -> CFStringRef;

    pub fn LSCopyDefaultRoleHandlerForContentType(
        inContentType: CFStringRef,
        inRole: u32,
    ) -> CFStringRef;

    pub fn LSCopyAllHandlersForURLScheme(inURLScheme: CFStringRef) -> CFArrayRef;

    pub fn LSCopyAllRoleHandlersForContentType(
        inContentType: CFStringRef,
        inRole: u32,
    ) -> CFArrayRef;

    pub fn LSRegisterURL(inURL: CFURLRef, inUpdate: Boolean) -> OSStatus;

    pub fn UTTypeCreatePreferredIdentifierForTag(
        inTagClass: CFStringRef,
        inTag: CFStringRef,
        inConformingToUTI: CFStringRef,
    ) -> CFStringRef;

    pub fn UTTypeCopyPreferredTagWithClass(
        inUTI: CFStringRef,
        inTagClass: CFStringRef,
    ) -> CFStringRef;

    pub fn UTTypeConformsTo(inUTI: CFStringRef, inConformsToUTI: CFStringRef) -> Boolean;

    pub fn UTTypeIsDeclared(inUTI: CFStringRef) -> Boolean;

    pub fn UTTypeIsDynamic(inUTI: CFStringRef) -> Boolean;
}

// Linked for NSWorkspace and UTType
#[link(name = "AppKit", kind = "framework")]
unsafe extern "C" {}

#[link(name = "UniformTypeIdentifiers", kind = "framework")]
unsafe extern "C" {}
