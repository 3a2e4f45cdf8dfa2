//! Unicode encoding-conformance test data.
//!
//! A fixed table of GB18030 sample strings exposed as labeled pairs for
//! parameterized tests. This module is a data provider only: nothing in the
//! resolution or repository-discovery code depends on it.

/// A labeled sample string.
///
/// `text` is `None` for the degenerate "Null" entry of the extended
/// sequence; all other entries carry a (possibly empty) string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    /// Human-readable label for the sample.
    pub label: &'static str,
    /// The sample string, or `None` for the null entry.
    pub text: Option<&'static str>,
}

/// The GB18030 sample strings.
pub const GB18030_SAMPLES: &[Sample] = &[
    Sample {
        label: "Single Byte",
        text: Some("!\"#)6=@Aa}~"),
    },
    Sample {
        label: "Double Byte",
        text: Some("啊齄丂狛狜隣郎隣兀﨩ˊ▇█〞〡¦TEL(株)‐ー*+@、〓ix1.€(一)(十)IXII!¯ぁんァヶΑ_АЯаяāɡㄅㄩ─╋(』【—__ixɑ ɡ〇〾⿻⺁ 䜣 €"),
    },
    Sample {
        label: "Four byte (Ext-A)",
        text: Some("㐀㒣㕴㕵㙉㙊䵯䵰䶴䶵"),
    },
    Sample {
        label: "Four byte (Ext-B, Optional, not supported on macOS out of the box)",
        text: Some("𪛖𪛕𪛔𪛓𪛒𪛑𠀃𠀂𠀁𠀀"),
    },
    Sample {
        label: "Four byte (Mongolian)",
        text: Some("᠀᠐᠙ᠠᡷᢀᡨᡩᡪᡫ"),
    },
    Sample {
        label: "Four byte (Tibetan)",
        text: Some("ༀཇཉཪཱྋ྾࿌࿏ྼྼ"),
    },
    Sample {
        label: "Four byte (Yi)",
        text: Some("ꀀ ꒌ ꂋ ꂌ ꂍ ꂎ ꂔ ꂕ ꒐ ꓆"),
    },
    Sample {
        label: "Four byte (Uighur)",
        text: Some("پپڭیئبلإلا،؟ئبتجدرشعە"),
    },
    Sample {
        label: "Four byte (Tai Le)",
        text: Some("ᥐᥥᥦᥧᥨᥭᥰᥱᥲᥴ"),
    },
    Sample {
        label: "Four byte (Hangul)",
        text: Some("ᄓᄕᇬᇌᇜᇱ기가힝"),
    },
    Sample {
        label: "Emoji",
        text: Some("🥑🌮🍔🐈"),
    },
];

/// The degenerate entries prepended by the extended sequence.
const NULL_AND_EMPTY: &[Sample] = &[
    Sample {
        label: "Null",
        text: None,
    },
    Sample {
        label: "Empty",
        text: Some(""),
    },
];

/// Iterate over the GB18030 sample pairs.
///
/// The iterator is finite and restartable: every call yields a fresh pass
/// over the same table.
///
/// # Examples
///
/// ```
/// use pathroot::testdata::gb18030_samples;
///
/// for sample in gb18030_samples() {
///     assert!(sample.text.is_some());
/// }
/// ```
pub fn gb18030_samples() -> impl Iterator<Item = Sample> {
    GB18030_SAMPLES.iter().copied()
}

/// Iterate over the GB18030 sample pairs with `(Null, None)` and
/// `(Empty, "")` prepended ahead of the base sequence.
///
/// # Examples
///
/// ```
/// use pathroot::testdata::{gb18030_samples, gb18030_samples_with_null_and_empty};
///
/// let extended: Vec<_> = gb18030_samples_with_null_and_empty().collect();
/// assert_eq!(extended.len(), gb18030_samples().count() + 2);
/// assert_eq!(extended[0].label, "Null");
/// assert_eq!(extended[1].label, "Empty");
/// ```
pub fn gb18030_samples_with_null_and_empty() -> impl Iterator<Item = Sample> {
    NULL_AND_EMPTY.iter().copied().chain(gb18030_samples())
}
