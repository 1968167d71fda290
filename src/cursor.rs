/// Forward-only view over a byte slice.
///
/// Every read either consumes exactly the requested number of bytes or
/// leaves the cursor untouched and reports how many bytes were missing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cursor<'a> {
    buf: &'a [u8],
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    pub(crate) fn remaining(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Split off the next `len` bytes, or return the number of missing bytes
    pub(crate) fn take(&mut self, len: usize) -> Result<&'a [u8], usize> {
        match self.buf.split_at_checked(len) {
            Some((head, tail)) => {
                self.buf = tail;
                Ok(head)
            }
            None => Err(len - self.buf.len()),
        }
    }

    /// Split off a fixed-size header, or return the number of missing bytes
    pub(crate) fn take_array<const N: usize>(&mut self) -> Result<[u8; N], usize> {
        match self.buf.split_first_chunk::<N>() {
            Some((head, tail)) => {
                self.buf = tail;
                Ok(*head)
            }
            None => Err(N - self.buf.len()),
        }
    }
}
