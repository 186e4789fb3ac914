// buffer.rs
//
// Copyright (c) 2026  Douglas Lau
//
//! Fixed-capacity output buffer with a write cursor

/// Byte buffer which never grows after construction.
///
/// The whole capacity is allocated (and zeroed) up front; writes copy into
/// it at the cursor.  Writing past the end is a contract violation and
/// panics.
#[derive(Debug)]
pub struct FixedBuf {
    /// Allocated bytes (length is the physical capacity)
    bytes: Vec<u8>,
    /// Write cursor
    pos: usize,
}

impl FixedBuf {
    /// Allocate a buffer with an exact capacity
    pub fn with_capacity(capacity: usize) -> Self {
        FixedBuf {
            bytes: vec![0; capacity],
            pos: 0,
        }
    }

    /// Get the physical capacity
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Get the write cursor position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Get the number of bytes still writable
    pub fn remaining(&self) -> usize {
        self.capacity() - self.pos
    }

    /// Get the bytes written so far
    #[cfg(test)]
    pub fn written(&self) -> &[u8] {
        &self.bytes[..self.pos]
    }

    /// Write a slice of bytes
    pub fn put(&mut self, data: &[u8]) {
        debug_assert!(
            data.len() <= self.remaining(),
            "write of {} bytes overflows buffer ({} remaining)",
            data.len(),
            self.remaining()
        );
        let end = self.pos + data.len();
        self.bytes[self.pos..end].copy_from_slice(data);
        self.pos = end;
    }

    /// Write one byte
    pub fn put_u8(&mut self, value: u8) {
        self.put(&[value]);
    }

    /// Write a little-endian `u16`
    pub fn put_u16_le(&mut self, value: u16) {
        self.put(&value.to_le_bytes());
    }

    /// Advance the cursor over bytes which are already zero
    pub fn put_zeros(&mut self, len: usize) {
        debug_assert!(len <= self.remaining());
        let end = self.pos + len;
        self.bytes[self.pos..end].fill(0);
        self.pos = end;
    }

    /// Trim to the written bytes and release the buffer
    pub fn into_vec(mut self) -> Vec<u8> {
        self.bytes.truncate(self.pos);
        self.bytes
    }
}
