/*!
  The contract an I/O unit implements to take part in `IN`, `OUT`, `JBUS` and `JRED`.

  Devices are polled, never waited on. `IN` and `OUT` only start a transfer when `ready()`
  holds; otherwise the command does nothing and is retried on the next step. A program that
  wants to wait for a unit loops on `JBUS` itself.

  A transfer of one block is `block_size()` calls of `read_next` or `write_next`, each moving one
  word, all with the same block id.
*/

use crate::word::{Word, WordValue};

pub type DeviceId = u8;
pub type DeviceBlockId = WordValue;

/// Units `0..=20` of the reference configuration.
pub const DEVICES_COUNT: usize = 21;

pub trait IODevice {
  fn ready(&self) -> bool;

  /// Words per block.
  fn block_size(&self) -> usize;

  fn read_next(&mut self, block: DeviceBlockId) -> Word;

  fn write_next(&mut self, block: DeviceBlockId, word: &Word);
}

/// Disks and drums address blocks by the value of rX; other units are sequential.
pub fn is_direct_access(id: DeviceId) -> bool {
  (8..=15).contains(&id)
}
