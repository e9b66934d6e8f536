//! Umbrella types reported in a type's conformance set.
//!
//! The OS answers "does A conform to B" but cannot list every parent, so the
//! set is computed against this fixed list of broad categories.

pub const UMBRELLA_TYPES: &[&str] = &[
    "public.item",
    "public.content",
    "public.data",
    "public.composite-content",
    "public.text",
    "public.plain-text",
    "public.source-code",
    "public.script",
    "com.adobe.pdf",
    "public.image",
    "public.audio",
    "public.audiovisual-content",
    "public.movie",
    "public.video",
    "public.archive",
    "public.zip-archive",
    "org.gnu.gnu-zip-archive",
    "public.executable",
    "public.font",
    "public.presentation",
    "public.spreadsheet",
];
