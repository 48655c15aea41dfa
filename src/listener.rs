/*!
  Observation points of the computer. Every executed command is bracketed by
  `on_before_command` and `on_after_command`, and every change of a register, memory cell, flag
  or the current address is reported. Listeners only observe; nothing they do affects execution.

  All methods have empty default implementations, so a listener implements only what it needs
  and `NullListener` is the listener of a computer nobody watches.
*/

use crate::bytecode::Command;
use crate::device::{DeviceBlockId, DeviceId};
use crate::word::WordValue;

pub trait ComputerListener {
  fn on_memory_set(&mut self, _address: WordValue) {}
  fn on_ra_set(&mut self) {}
  fn on_rx_set(&mut self) {}
  /// `index` is `1..=6`.
  fn on_ri_set(&mut self, _index: usize) {}
  fn on_rj_set(&mut self) {}
  fn on_overflow_flag_set(&mut self) {}
  fn on_comparison_state_set(&mut self) {}
  fn on_current_address_changed(&mut self, _address: WordValue) {}
  fn on_jump(&mut self, _address: WordValue) {}
  fn on_before_command(&mut self, _command: &Command) {}
  fn on_after_command(&mut self, _command: &Command) {}
  fn on_device_read(&mut self, _device: DeviceId, _block: DeviceBlockId) {}
  fn on_device_write(&mut self, _device: DeviceId, _block: DeviceBlockId) {}
  fn on_wait_on_device(&mut self, _device: DeviceId) {}
  fn on_halt(&mut self) {}
}

#[derive(Copy, Clone, Default, Debug)]
pub struct NullListener;

impl ComputerListener for NullListener {}

/// Prints commands, jumps and device traffic as they happen.
#[cfg(feature = "trace_computation")]
#[derive(Copy, Clone, Default, Debug)]
pub struct TraceListener;

#[cfg(feature = "trace_computation")]
impl ComputerListener for TraceListener {
  fn on_before_command(&mut self, command: &Command) {
    println!("execute {}", command);
  }

  fn on_jump(&mut self, address: WordValue) {
    println!("  jump to {:04}", address);
  }

  fn on_device_read(&mut self, device: DeviceId, block: DeviceBlockId) {
    println!("  read block {} of unit {}", block, device);
  }

  fn on_device_write(&mut self, device: DeviceId, block: DeviceBlockId) {
    println!("  write block {} of unit {}", block, device);
  }

  fn on_wait_on_device(&mut self, device: DeviceId) {
    println!("  unit {} busy", device);
  }

  fn on_halt(&mut self) {
    println!("halted");
  }
}
