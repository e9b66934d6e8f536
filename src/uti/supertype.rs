//! Supertype keys
//!
//! A closed table of kebab-case keys for the coarse content categories a
//! config may bind under `[types]`. Lookup is case-sensitive.

/// `(key, canonical identifier)` pairs, grouped by family
pub const SUPERTYPES: &[(&str, &str)] = &[
    // Text and documents
    ("text", "public.text"),
    ("plain-text", "public.plain-text"),
    ("utf8-plain-text", "public.utf8-plain-text"),
    ("utf16-plain-text", "public.utf16-plain-text"),
    ("utf16-external-plain-text", "public.utf16-external-plain-text"),
    ("rtf", "public.rtf"),
    ("rtfd", "com.apple.rtfd"),
    ("flat-rtfd", "com.apple.flat-rtfd"),
    ("delimited-text", "public.delimited-values-text"),
    ("comma-separated-text", "public.comma-separated-values-text"),
    ("tab-separated-text", "public.tab-separated-values-text"),
    ("utf8-tab-separated-text", "public.utf8-tab-separated-values-text"),
    ("json", "public.json"),
    ("xml", "public.xml"),
    ("yaml", "public.yaml"),
    ("markdown", "net.daringfireball.markdown"),
    ("vcard", "public.vcard"),
    ("html", "public.html"),
    ("web-archive", "com.apple.webarchive"),
    // Images
    ("image", "public.image"),
    ("png", "public.png"),
    ("jpeg", "public.jpeg"),
    ("gif", "com.compuserve.gif"),
    ("tiff", "public.tiff"),
    ("bmp", "com.microsoft.bmp"),
    ("svg", "public.svg-image"),
    ("webp", "org.webmproject.webp"),
    ("heic", "public.heic"),
    ("heif", "public.heif"),
    ("live-photo", "com.apple.live-photo"),
    ("raw-image", "public.camera-raw-image"),
    ("dng", "com.adobe.raw-image"),
    ("exr", "com.ilm.openexr-image"),
    ("jpeg-xl", "public.jpeg-xl"),
    // Audio
    ("audio", "public.audio"),
    ("mp3", "public.mp3"),
    ("wav", "com.microsoft.waveform-audio"),
    ("aiff", "public.aiff-audio"),
    ("midi", "public.midi-audio"),
    ("mpeg4-audio", "public.mpeg-4-audio"),
    ("apple-protected-mpeg4-audio", "com.apple.protected-mpeg-4-audio"),
    ("playlist", "public.playlist"),
    ("m3u-playlist", "public.m3u-playlist"),
    // Video
    ("video", "public.video"),
    ("movie", "public.movie"),
    ("quicktime-movie", "com.apple.quicktime-movie"),
    ("mpeg", "public.mpeg"),
    ("mpeg2-video", "public.mpeg-2-video"),
    ("mpeg2-transport-stream", "public.mpeg-2-transport-stream"),
    ("mpeg4-movie", "public.mpeg-4"),
    ("apple-protected-mpeg4-video", "com.apple.protected-mpeg-4-video"),
    ("avi", "public.avi"),
    // Archives
    ("archive", "public.archive"),
    ("zip", "public.zip-archive"),
    ("gzip", "org.gnu.gnu-zip-archive"),
    ("bz2", "public.bzip2-archive"),
    ("tar-archive", "public.tar-archive"),
    ("apple-archive", "com.apple.archive"),
    // Source code
    ("source-code", "public.source-code"),
    ("c-source", "public.c-source"),
    ("c-header", "public.c-header"),
    ("c++-source", "public.c-plus-plus-source"),
    ("c++-header", "public.c-plus-plus-header"),
    ("objective-c-source", "public.objective-c-source"),
    ("objective-c++-source", "public.objective-c-plus-plus-source"),
    ("swift-source", "public.swift-source"),
    ("assembly-language-source", "public.assembly-source"),
    ("shell-script", "public.shell-script"),
    ("makefile", "public.make-source"),
    ("javascript", "com.netscape.javascript-source"),
    ("python-script", "public.python-script"),
    ("ruby-script", "public.ruby-script"),
    ("perl-script", "public.perl-script"),
    ("php-script", "public.php-script"),
    ("apple-script", "com.apple.applescript.text"),
    ("osa-script", "com.apple.applescript.script"),
    ("osa-script-bundle", "com.apple.applescript.script-bundle"),
    // Filesystem and system
    ("data", "public.data"),
    ("directory", "public.directory"),
    ("folder", "public.folder"),
    ("symbolic-link", "public.symlink"),
    ("mount-point", "com.apple.mount-point"),
    ("alias-file", "com.apple.alias-file"),
    ("volume", "public.volume"),
    ("disk-image", "public.disk-image"),
    ("application-bundle", "com.apple.application-bundle"),
    ("framework", "com.apple.framework"),
    ("executable", "public.executable"),
    ("unix-executable", "public.unix-executable"),
    ("windows-executable", "com.microsoft.windows-executable"),
    // 3D content
    ("3d-content", "public.3d-content"),
    ("usd", "com.pixar.universal-scene-description"),
    ("usdz", "com.pixar.universal-scene-description-mobile"),
    ("reality-file", "com.apple.reality"),
    ("scene-kit-scene", "com.apple.scenekit.scene"),
    ("ar-reference-object", "com.apple.arobject"),
    // Fonts
    ("font", "public.font"),
    // Cryptographic files
    ("pkcs12", "com.rsa.pkcs-12"),
    ("x509-certificate", "public.x509-certificate"),
    // URLs
    ("url", "public.url"),
    ("file-url", "public.file-url"),
    ("url-bookmark-data", "com.apple.bookmark"),
    // Property lists
    ("property-list", "com.apple.property-list"),
    ("xml-property-list", "com.apple.xml-property-list"),
    ("binary-property-list", "com.apple.binary-property-list"),
    // Miscellaneous
    ("log", "public.log"),
    ("bookmark", "public.bookmark"),
    ("internet-location", "com.apple.web-internet-location"),
    ("internet-shortcut", "com.microsoft.internet-shortcut"),
];

/// Canonical identifier for a supertype key
pub fn identifier_for(key: &str) -> Option<&'static str> {
    SUPERTYPES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, identifier)| *identifier)
}

/// Supertype key for a canonical identifier (identifiers compare case-insensitively)
pub fn key_for(identifier: &str) -> Option<&'static str> {
    SUPERTYPES
        .iter()
        .find(|(_, id)| id.eq_ignore_ascii_case(identifier))
        .map(|(key, _)| *key)
}
