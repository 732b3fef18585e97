// crates/bracket_spans/src/lib.rs

//! Extraction of `[...]` spans, outer match first, then everything nested
//! inside it, then everything after it.

/// Returns the byte index of the `]` that closes the `[` at `open`.
///
/// The scan keeps an open-count starting at 1: every `[` increments it and
/// every `]` decrements it. Returns `None` if the end of `text` is reached
/// before the count drops back to zero.
///
/// # Arguments
///
/// * `text` - The text being scanned.
/// * `open` - Byte index of an opening bracket in `text`.
pub fn find_matching_close(text: &str, open: usize) -> Option<usize> {
    let mut open_count = 1usize;
    for (i, b) in text.bytes().enumerate().skip(open + 1) {
        match b {
            b'[' => open_count += 1,
            b']' => {
                open_count -= 1;
                if open_count == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Returns a lazy iterator over every bracket span in `text`.
///
/// For the first `[` in `text` and its matching `]`, the iterator yields the
/// text between them, then every span nested inside that text, then every span
/// found in the text following the matching `]`.
///
/// If the first `[` is never closed, that region yields nothing at all. This is
/// not reported as an error.
pub fn extract_spans(text: &str) -> BracketSpans<'_> {
    BracketSpans {
        pending: vec![(0, text)],
    }
}

/// Iterator returned by [`extract_spans`].
///
/// Each pending entry is a piece of the input still to be scanned, paired with
/// the byte offset of its first character in the original text.
#[derive(Clone, Debug)]
pub struct BracketSpans<'a> {
    pending: Vec<(usize, &'a str)>,
}

impl<'a> BracketSpans<'a> {
    /// Yields `(offset, span)` pairs, where `offset` is the byte position of
    /// the span's first character in the text passed to [`extract_spans`].
    pub fn with_offsets(self) -> WithOffsets<'a> {
        WithOffsets { inner: self }
    }

    fn next_with_offset(&mut self) -> Option<(usize, &'a str)> {
        while let Some((base, text)) = self.pending.pop() {
            let Some(open) = text.find('[') else {
                continue;
            };
            let Some(close) = find_matching_close(text, open) else {
                log::debug!("unmatched '[' at byte {}; skipping region", base + open);
                continue;
            };

            let inner = &text[open + 1..close];
            // Remainder goes below the inner span so nested spans come out first.
            self.pending.push((base + close + 1, &text[close + 1..]));
            self.pending.push((base + open + 1, inner));
            return Some((base + open + 1, inner));
        }
        None
    }
}

impl<'a> Iterator for BracketSpans<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_with_offset().map(|(_, span)| span)
    }
}

/// Iterator returned by [`BracketSpans::with_offsets`].
#[derive(Clone, Debug)]
pub struct WithOffsets<'a> {
    inner: BracketSpans<'a>,
}

impl<'a> Iterator for WithOffsets<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next_with_offset()
    }
}
