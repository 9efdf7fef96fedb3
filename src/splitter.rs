use memchr::Memchr;

/// Splits a string on a single ASCII delimiter, yielding empty pieces too.
///
/// Unlike [str::split], the search is backed by `memchr`.
#[derive(Debug)]
pub(crate) struct Splitter<'a> {
    string: &'a str,
    cur_start: usize,
    memchr: Memchr<'a>,
}

impl<'a> Splitter<'a> {
    pub fn new(string: &'a str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii());
        Self {
            string,
            memchr: memchr::memchr_iter(delimiter, string.as_bytes()),
            cur_start: 0,
        }
    }
}

impl<'a> Iterator for Splitter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let cur_end = match self.memchr.next() {
            None => {
                if self.cur_start > self.string.len() {
                    return None;
                }
                self.string.len()
            }
            Some(end) => end,
        };
        // SAFETY: the delimiter is ASCII, so both ends sit on char boundaries
        let s = unsafe { self.string.get_unchecked(self.cur_start..cur_end) };
        self.cur_start = cur_end + 1;
        Some(s)
    }
}
