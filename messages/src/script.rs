//! Push-only script reading and writing.
//!
//! Protocol fields are carried as consecutive data pushes after OP_RETURN.
//! [`PushReader`] walks those pushes without copying: every item it yields
//! borrows from the input script, and a declared length is only honoured
//! after it has been checked against the bytes actually remaining.

use crate::error::{DecodeError, FieldError};

pub const OP_0: u8 = 0x00;
pub const OP_PUSHDATA1: u8 = 0x4c;
pub const OP_PUSHDATA2: u8 = 0x4d;
pub const OP_PUSHDATA4: u8 = 0x4e;
pub const OP_1NEGATE: u8 = 0x4f;
pub const OP_16: u8 = 0x60;
pub const OP_RETURN: u8 = 0x6a;

/// Largest push encoded directly by its opcode.
const MAX_DIRECT_PUSH: usize = 0x4b;

/// Iterator over the data pushes of a push-only script body.
///
/// Yields `Err` at most once; iteration stops after the first error.
#[derive(Clone, Debug)]
pub struct PushReader<'a> {
    script: &'a [u8],
    pos: usize,
    index: usize,
}

impl<'a> PushReader<'a> {
    /// `script` is the script body following OP_RETURN.
    pub fn new(script: &'a [u8]) -> Self {
        Self {
            script,
            pos: 0,
            index: 0,
        }
    }

    fn remaining(&self) -> usize {
        self.script.len() - self.pos
    }

    fn fail(&mut self, err: DecodeError) -> Option<Result<&'a [u8], DecodeError>> {
        self.pos = self.script.len();
        Some(Err(err))
    }

    /// Read an `N`-byte little-endian length header.
    fn read_length<const N: usize>(&mut self) -> Result<usize, DecodeError> {
        if self.remaining() < N {
            return Err(DecodeError::Truncated {
                index: self.index,
                declared: N,
                remaining: self.remaining(),
            });
        }
        let mut buf = [0u8; 8];
        buf[..N].copy_from_slice(&self.script[self.pos..self.pos + N]);
        self.pos += N;
        usize::try_from(u64::from_le_bytes(buf)).map_err(|_| DecodeError::Truncated {
            index: self.index,
            declared: usize::MAX,
            remaining: self.remaining(),
        })
    }
}

impl<'a> Iterator for PushReader<'a> {
    type Item = Result<&'a [u8], DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.script.len() {
            return None;
        }
        let index = self.index;
        let opcode = self.script[self.pos];
        self.pos += 1;

        let len = match opcode {
            OP_0 => return self.fail(DecodeError::malformed(index, FieldError::Op0NotAllowed)),
            0x01..=0x4b => Ok(opcode as usize),
            OP_PUSHDATA1 => self.read_length::<1>(),
            OP_PUSHDATA2 => self.read_length::<2>(),
            OP_PUSHDATA4 => self.read_length::<4>(),
            OP_1NEGATE..=OP_16 => {
                return self.fail(DecodeError::malformed(
                    index,
                    FieldError::NumberOpcodeNotAllowed(opcode),
                ))
            }
            _ => {
                return self.fail(DecodeError::malformed(
                    index,
                    FieldError::NonPushOpcode(opcode),
                ))
            }
        };
        let len = match len {
            Ok(len) => len,
            Err(err) => return self.fail(err),
        };

        if len > self.remaining() {
            let remaining = self.remaining();
            return self.fail(DecodeError::Truncated {
                index,
                declared: len,
                remaining,
            });
        }
        let data = &self.script[self.pos..self.pos + len];
        self.pos += len;
        self.index += 1;
        Some(Ok(data))
    }
}

/// Append `data` to `script` as a single push using the smallest opcode the
/// reader accepts. Empty data is written as `OP_PUSHDATA1 0x00` since OP_0
/// is refused by the reader.
pub fn push_data(script: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();
    if len == 0 {
        script.extend_from_slice(&[OP_PUSHDATA1, 0]);
    } else if len <= MAX_DIRECT_PUSH {
        script.push(len as u8);
    } else if len <= u8::MAX as usize {
        script.extend_from_slice(&[OP_PUSHDATA1, len as u8]);
    } else if len <= u16::MAX as usize {
        script.push(OP_PUSHDATA2);
        script.extend_from_slice(&(len as u16).to_le_bytes());
    } else {
        script.push(OP_PUSHDATA4);
        script.extend_from_slice(&(len as u32).to_le_bytes());
    }
    script.extend_from_slice(data);
}
