//! The MIX computer: registers, flags, memory and devices, and the fetch-decode-execute cycle
//! over them.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use prettytable::{format as TableFormat, Table};

use crate::byte::Byte;
use crate::bytecode::{
  AddressAction, ArithmeticOperation, Command, Instruction, JumpCondition, RegisterCondition,
  ShiftKind
};
use crate::char_table::{is_char_code, ZERO_CODE};
use crate::device::{is_direct_access, DeviceBlockId, DeviceId, IODevice, DEVICES_COUNT};
use crate::errors::RunError;
use crate::field::WordField;
use crate::listener::{ComputerListener, NullListener};
use crate::memory::Memory;
use crate::registers::{AddressRegister, IndexRegister, RegisterId, INDEX_REGISTERS_COUNT};
use crate::word::{Sign, Word, WordValue, BYTES_COUNT, MAX_ABS_VALUE};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum OverflowFlag {
  NoOverflow,
  Overflow
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComparisonIndicator {
  Less,
  Equal,
  Greater
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ComputerState {
  Running,
  /// Terminal. Reached by `HLT` or by a fatal error.
  Halted
}

/// Where execution continues after a command.
enum Flow {
  Next,
  Jump(WordValue),
  /// The command could not start (busy device) and runs again on the next step.
  Retry,
  Halt
}

pub struct Computer {

  // Registers //
  ra : Word,
  rx : Word,
  ri : [IndexRegister; INDEX_REGISTERS_COUNT],
  rj : AddressRegister,

  // Flags //
  overflow   : OverflowFlag,
  comparison : ComparisonIndicator,

  memory          : Memory,
  current_address : WordValue,
  state           : ComputerState,

  devices  : Vec<Option<Box<dyn IODevice>>>,
  listener : Box<dyn ComputerListener>,
}

impl Computer {

  // region Display methods

  fn make_register_table(rows: Vec<(String, String)>) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Register", ubl->"Contents"]);

    for (name, contents) in rows {
      table.add_row(row![r->format!("{} =", name), contents]);
    }
    table
  }

  fn make_memory_table(&self) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Address", ubl->"Contents"]);

    for (address, word) in self.memory.non_zero_cells() {
      match address as WordValue == self.current_address {

        true  => {
          table.add_row(row![r->format!("* --> {:04} =", address), format!("{}", word)]);
        }

        false => {
          table.add_row(row![r->format!("{:04} =", address), format!("{}", word)]);
        }

      } // end match on highlight
    } // end for
    table
  }

  // endregion

  // region Construction and state access

  pub fn new() -> Computer {
    Computer::with_listener(Box::new(NullListener))
  }

  pub fn with_listener(listener: Box<dyn ComputerListener>) -> Computer {
    Computer {
      ra              : Word::new(),
      rx              : Word::new(),
      ri              : [IndexRegister::new(); INDEX_REGISTERS_COUNT],
      rj              : AddressRegister::new(),
      overflow        : OverflowFlag::NoOverflow,
      comparison      : ComparisonIndicator::Equal,
      memory          : Memory::new(),
      current_address : 0,
      state           : ComputerState::Running,
      devices         : (0..DEVICES_COUNT).map(|_| None).collect(),
      listener,
    }
  }

  pub fn set_listener(&mut self, listener: Box<dyn ComputerListener>) {
    self.listener = listener;
  }

  pub fn ra(&self) -> &Word {
    &self.ra
  }

  pub fn set_ra(&mut self, word: Word) {
    self.ra = word;
    self.listener.on_ra_set();
  }

  pub fn rx(&self) -> &Word {
    &self.rx
  }

  pub fn set_rx(&mut self, word: Word) {
    self.rx = word;
    self.listener.on_rx_set();
  }

  /// Index register `1..=6`.
  pub fn ri(&self, index: usize) -> Result<&IndexRegister, RunError> {
    match index >= 1 && index <= INDEX_REGISTERS_COUNT {
      true  => Ok(&self.ri[index - 1]),
      false => Err(RunError::InvalidIndexRegister(index as u8))
    }
  }

  pub fn set_ri(&mut self, index: usize, register: IndexRegister) -> Result<(), RunError> {
    if index < 1 || index > INDEX_REGISTERS_COUNT {
      return Err(RunError::InvalidIndexRegister(index as u8));
    }
    self.ri[index - 1] = register;
    self.listener.on_ri_set(index);
    Ok(())
  }

  pub fn rj(&self) -> &AddressRegister {
    &self.rj
  }

  pub fn set_rj(&mut self, register: AddressRegister) {
    self.rj = register;
    self.listener.on_rj_set();
  }

  pub fn overflow_flag(&self) -> OverflowFlag {
    self.overflow
  }

  pub fn set_overflow_flag(&mut self, flag: OverflowFlag) {
    self.overflow = flag;
    self.listener.on_overflow_flag_set();
  }

  pub fn comparison_state(&self) -> ComparisonIndicator {
    self.comparison
  }

  pub fn set_comparison_state(&mut self, state: ComparisonIndicator) {
    self.comparison = state;
    self.listener.on_comparison_state_set();
  }

  pub fn memory(&self, address: WordValue) -> Result<&Word, RunError> {
    self.memory.get(address)
  }

  pub fn set_memory(&mut self, address: WordValue, word: Word) -> Result<(), RunError> {
    self.memory.set(address, word)?;
    self.listener.on_memory_set(address);
    Ok(())
  }

  pub fn current_address(&self) -> WordValue {
    self.current_address
  }

  /// Sets the address of the next command to fetch.
  pub fn set_next_address(&mut self, address: WordValue) {
    self.current_address = address;
    self.listener.on_current_address_changed(address);
  }

  pub fn state(&self) -> ComputerState {
    self.state
  }

  pub fn is_halted(&self) -> bool {
    self.state == ComputerState::Halted
  }

  /// Installs `device` as unit `id`, returning the unit it replaces.
  pub fn replace_device(&mut self, id: DeviceId, device: Box<dyn IODevice>)
    -> Result<Option<Box<dyn IODevice>>, RunError>
  {
    match self.devices.get_mut(id as usize) {
      Some(slot) => Ok(slot.replace(device)),
      None       => Err(RunError::UnknownDevice(id))
    }
  }

  // endregion

  // region Execution

  /// Fetches, decodes and executes the command at the current address. Does nothing once the
  /// computer has halted.
  pub fn run_one(&mut self) -> Result<(), RunError> {
    if self.is_halted() {
      return Ok(());
    }

    let command =
      self.memory
          .get(self.current_address)
          .and_then(Command::from_word);
    let result = match command {
      Ok(command) => self.execute(&command),
      Err(e)      => {
        self.halt();
        Err(e)
      }
    };

    #[cfg(feature = "trace_computation")] println!("{}", self);

    result
  }

  /// Runs until `HLT` or a fatal error.
  pub fn run(&mut self) -> Result<(), RunError> {
    while !self.is_halted() {
      self.run_one()?;
    }
    Ok(())
  }

  /**
    Executes `command` as if it had been fetched from the current address. A fatal error halts
    the computer before it is returned.
  */
  pub fn execute(&mut self, command: &Command) -> Result<(), RunError> {
    self.listener.on_before_command(command);

    let flow = Instruction::decode(command)
        .and_then(|instruction| self.execute_instruction(command, instruction));

    match flow {

      Ok(Flow::Next) => {
        self.set_next_address(self.current_address + 1);
      }

      Ok(Flow::Jump(address)) => {
        self.listener.on_jump(address);
        self.set_next_address(address);
      }

      Ok(Flow::Retry) => {}

      Ok(Flow::Halt) => {
        self.set_next_address(self.current_address + 1);
        self.halt();
      }

      Err(e) => {
        self.halt();
        return Err(e);
      }

    }

    self.listener.on_after_command(command);
    Ok(())
  }

  fn halt(&mut self) {
    self.state = ComputerState::Halted;
    self.listener.on_halt();
  }

  fn execute_instruction(&mut self, command: &Command, instruction: Instruction)
    -> Result<Flow, RunError>
  {
    match instruction {

      Instruction::Nop => Ok(Flow::Next),

      Instruction::Arithmetic { operation, field } => {
        let operand = self.memory.get(self.indexed_address(command)?)?.field(field);
        match operation {
          ArithmeticOperation::Add      => self.add_to_register(RegisterId::A, &operand)?,
          ArithmeticOperation::Subtract => self.add_to_register(RegisterId::A, &-operand)?,
          ArithmeticOperation::Multiply => self.multiply(&operand),
          ArithmeticOperation::Divide   => self.divide(&operand)?,
        }
        Ok(Flow::Next)
      }

      Instruction::Num => {
        self.convert_to_number()?;
        Ok(Flow::Next)
      }

      Instruction::Char => {
        self.convert_to_characters();
        Ok(Flow::Next)
      }

      Instruction::Halt => Ok(Flow::Halt),

      Instruction::Shift(kind) => {
        let count = self.indexed_address(command)?;
        if count < 0 {
          return Err(RunError::InvalidShift(count));
        }
        self.shift(kind, count as usize);
        Ok(Flow::Next)
      }

      Instruction::Move { count } => {
        self.move_words(self.indexed_address(command)?, count)?;
        Ok(Flow::Next)
      }

      Instruction::Load { register, field, negative } => {
        let value = self.memory.get(self.indexed_address(command)?)?.field(field);
        match negative {
          true  => self.set_register(register, -value)?,
          false => self.set_register(register, value)?
        }
        Ok(Flow::Next)
      }

      Instruction::Store { register, field } => {
        let source = self.register_word(register)?;
        self.store(command, &source, field)?;
        Ok(Flow::Next)
      }

      Instruction::StoreZero { field } => {
        self.store(command, &Word::new(), field)?;
        Ok(Flow::Next)
      }

      Instruction::JumpBusy(id) => {
        let ready = self.device(id)?.ready();
        self.jump_if(command, !ready, true)
      }

      Instruction::JumpReady(id) => {
        let ready = self.device(id)?.ready();
        self.jump_if(command, ready, true)
      }

      Instruction::Control(id) => {
        // The device contract has no control operation; the unit only has to exist.
        self.device(id)?;
        Ok(Flow::Next)
      }

      Instruction::In(id) => self.read_block(command, id),

      Instruction::Out(id) => self.write_block(command, id),

      Instruction::Jump(condition) => self.jump(command, condition),

      Instruction::RegisterJump { register, condition } => {
        let value = self.register_word(register)?.value();
        let taken = match condition {
          RegisterCondition::Negative    => value < 0,
          RegisterCondition::Zero        => value == 0,
          RegisterCondition::Positive    => value > 0,
          RegisterCondition::NonNegative => value >= 0,
          RegisterCondition::NonZero     => value != 0,
          RegisterCondition::NonPositive => value <= 0,
        };
        self.jump_if(command, taken, true)
      }

      Instruction::AddressTransfer { register, action } => {
        self.transfer_address(command, register, action)?;
        Ok(Flow::Next)
      }

      Instruction::Compare { register, field } => {
        let left  = self.register_word(register)?.field(field).value();
        let right = self.memory.get(self.indexed_address(command)?)?.field(field).value();
        self.set_comparison_state(
          match left.cmp(&right) {
            Ordering::Less    => ComparisonIndicator::Less,
            Ordering::Equal   => ComparisonIndicator::Equal,
            Ordering::Greater => ComparisonIndicator::Greater,
          }
        );
        Ok(Flow::Next)
      }

    }
  }

  // endregion

  // region Command helpers

  /// `M`: the address part plus the selected index register.
  fn indexed_address(&self, command: &Command) -> Result<WordValue, RunError> {
    match command.address_index() {
      0     => Ok(command.address()),
      index => Ok(command.address() + self.ri(index as usize)?.value())
    }
  }

  fn register_word(&self, register: RegisterId) -> Result<Word, RunError> {
    match register {
      RegisterId::A    => Ok(self.ra),
      RegisterId::X    => Ok(self.rx),
      RegisterId::I(i) => Ok(*self.ri(i)?.word()),
      RegisterId::J    => Ok(*self.rj.word()),
    }
  }

  fn set_register(&mut self, register: RegisterId, word: Word) -> Result<(), RunError> {
    match register {
      RegisterId::A    => self.set_ra(word),
      RegisterId::X    => self.set_rx(word),
      RegisterId::I(i) => self.set_ri(i, IndexRegister::from_word(word)?)?,
      RegisterId::J    => self.set_rj(AddressRegister::from_word(word)?),
    }
    Ok(())
  }

  fn store(&mut self, command: &Command, source: &Word, field: WordField) -> Result<(), RunError> {
    let address = self.indexed_address(command)?;
    let mut cell = *self.memory.get(address)?;
    cell.set_field(source, field, true);
    self.set_memory(address, cell)
  }

  /**
    Adds `operand` to a register. For rA and rX an oversized sum sets the overflow flag and
    keeps the low-order five bytes; a zero sum keeps the register's sign. Index registers have
    no overflow flag, an oversized sum is an error.
  */
  fn add_to_register(&mut self, register: RegisterId, operand: &Word) -> Result<(), RunError> {
    let target = self.register_word(register)?;
    let sum = target.value() as i64 + operand.value() as i64;

    if let RegisterId::I(i) = register {
      return self.set_ri(i, IndexRegister::from_value(sum)?);
    }

    let sign = match sum.cmp(&0) {
      Ordering::Less    => Sign::Negative,
      Ordering::Greater => Sign::Positive,
      Ordering::Equal   => target.sign()
    };
    let (result, overflowed) = Word::from_magnitude_truncated(sign, sum.unsigned_abs());
    if overflowed {
      self.set_overflow_flag(OverflowFlag::Overflow);
    }
    self.set_register(register, result)
  }

  /// rA:rX = rA * V, both signs set to the sign of the product.
  fn multiply(&mut self, operand: &Word) {
    let sign = match self.ra.sign() == operand.sign() {
      true  => Sign::Positive,
      false => Sign::Negative
    };
    let product = self.ra.magnitude() * operand.magnitude();
    let modulus = MAX_ABS_VALUE as u64 + 1;

    let (high, _) = Word::from_magnitude_truncated(sign, product / modulus);
    let (low, _)  = Word::from_magnitude_truncated(sign, product % modulus);
    self.set_ra(high);
    self.set_rx(low);
  }

  /**
    rA = rA:rX / V and rX = rA:rX mod V. The quotient takes the sign of the product of the
    signs, the remainder the previous sign of rA. When the quotient does not fit (|rA| >= |V|)
    the overflow flag is set and both registers are left as they were.
  */
  fn divide(&mut self, operand: &Word) -> Result<(), RunError> {
    if operand.is_zero() {
      return Err(RunError::DivisionByZero);
    }
    if self.ra.magnitude() >= operand.magnitude() {
      self.set_overflow_flag(OverflowFlag::Overflow);
      return Ok(());
    }

    let modulus = MAX_ABS_VALUE as u64 + 1;
    let dividend = self.ra.magnitude() * modulus + self.rx.magnitude();
    let quotient_sign = match self.ra.sign() == operand.sign() {
      true  => Sign::Positive,
      false => Sign::Negative
    };
    let remainder_sign = self.ra.sign();

    let (quotient, _)  = Word::from_magnitude_truncated(quotient_sign, dividend / operand.magnitude());
    let (remainder, _) = Word::from_magnitude_truncated(remainder_sign, dividend % operand.magnitude());
    self.set_ra(quotient);
    self.set_rx(remainder);
    Ok(())
  }

  /// The ten bytes of rA:rX, most significant first.
  fn ax_bytes(&self) -> Vec<Byte> {
    self.ra.bytes().iter().chain(self.rx.bytes().iter()).cloned().collect()
  }

  fn set_ax_bytes(&mut self, bytes: &[Byte]) {
    let mut ra = self.ra;
    let mut rx = self.rx;
    for i in 0..BYTES_COUNT {
      ra.set_byte(i + 1, bytes[i]);
      rx.set_byte(i + 1, bytes[BYTES_COUNT + i]);
    }
    self.set_ra(ra);
    self.set_rx(rx);
  }

  /// Character codes in rA:rX to a number in rA. Every byte must be a character code; its
  /// value modulo 10 is the digit.
  fn convert_to_number(&mut self) -> Result<(), RunError> {
    let mut number: u64 = 0;
    for byte in self.ax_bytes() {
      if !is_char_code(byte) {
        return Err(RunError::InvalidCharacter(byte.value()));
      }
      number = number * 10 + (byte.value() % 10) as u64;
    }

    let (result, overflowed) = Word::from_magnitude_truncated(self.ra.sign(), number);
    if overflowed {
      self.set_overflow_flag(OverflowFlag::Overflow);
    }
    self.set_ra(result);
    Ok(())
  }

  /// |rA| to ten decimal digit characters in rA:rX. Signs are unchanged.
  fn convert_to_characters(&mut self) {
    let mut magnitude = self.ra.magnitude();
    let mut bytes = vec![Byte::MIN; 2 * BYTES_COUNT];
    for byte in bytes.iter_mut().rev() {
      let code = ZERO_CODE as i64 + (magnitude % 10) as i64;
      // Digit codes are 30 to 39.
      *byte = Byte::new(code).unwrap_or(Byte::MIN);
      magnitude /= 10;
    }
    self.set_ax_bytes(&bytes);
  }

  fn shift(&mut self, kind: ShiftKind, count: usize) {
    match kind {

      ShiftKind::LeftA | ShiftKind::RightA => {
        let mut bytes = self.ra.bytes().to_vec();
        shift_bytes(&mut bytes, count, kind == ShiftKind::LeftA);
        let mut ra = self.ra;
        for (i, byte) in bytes.into_iter().enumerate() {
          ra.set_byte(i + 1, byte);
        }
        self.set_ra(ra);
      }

      ShiftKind::LeftAX | ShiftKind::RightAX => {
        let mut bytes = self.ax_bytes();
        shift_bytes(&mut bytes, count, kind == ShiftKind::LeftAX);
        self.set_ax_bytes(&bytes);
      }

      ShiftKind::LeftCircular => {
        let mut bytes = self.ax_bytes();
        let len = bytes.len();
        bytes.rotate_left(count % len);
        self.set_ax_bytes(&bytes);
      }

      ShiftKind::RightCircular => {
        let mut bytes = self.ax_bytes();
        let len = bytes.len();
        bytes.rotate_right(count % len);
        self.set_ax_bytes(&bytes);
      }

    }
  }

  /// Copies `count` words from `from` to the address in rI1, advancing rI1 past them.
  fn move_words(&mut self, from: WordValue, count: u8) -> Result<(), RunError> {
    for k in 0..count as WordValue {
      let to = self.ri[0].value();
      let word = *self.memory.get(from + k)?;
      self.set_memory(to, word)?;
      self.set_ri(1, IndexRegister::from_value(to as i64 + 1)?)?;
    }
    Ok(())
  }

  fn jump(&mut self, command: &Command, condition: JumpCondition) -> Result<Flow, RunError> {
    let overflow = self.overflow == OverflowFlag::Overflow;
    let comparison = self.comparison;

    let taken = match condition {
      JumpCondition::Always            => true,
      JumpCondition::AlwaysSaveNothing => true,
      JumpCondition::Overflow          => overflow,
      JumpCondition::NoOverflow        => !overflow,
      JumpCondition::Less              => comparison == ComparisonIndicator::Less,
      JumpCondition::Equal             => comparison == ComparisonIndicator::Equal,
      JumpCondition::Greater           => comparison == ComparisonIndicator::Greater,
      JumpCondition::GreaterOrEqual    => comparison != ComparisonIndicator::Less,
      JumpCondition::NotEqual          => comparison != ComparisonIndicator::Equal,
      JumpCondition::LessOrEqual       => comparison != ComparisonIndicator::Greater,
    };

    if let JumpCondition::Overflow | JumpCondition::NoOverflow = condition {
      if overflow {
        self.set_overflow_flag(OverflowFlag::NoOverflow);
      }
    }

    self.jump_if(command, taken, condition != JumpCondition::AlwaysSaveNothing)
  }

  /// Jumps to `M` when `taken`, saving the address of the following command in rJ if asked.
  fn jump_if(&mut self, command: &Command, taken: bool, save_return: bool) -> Result<Flow, RunError> {
    if !taken {
      return Ok(Flow::Next);
    }
    let target = self.indexed_address(command)?;
    if save_return {
      self.set_rj(AddressRegister::from_value(self.current_address as i64 + 1)?);
    }
    Ok(Flow::Jump(target))
  }

  fn transfer_address(&mut self, command: &Command, register: RegisterId, action: AddressAction)
    -> Result<(), RunError>
  {
    let m = self.indexed_address(command)?;
    let mut value = Word::from_value(m as i64)?;
    if m == 0 {
      value.set_sign(command.address_sign());
    }

    match action {
      AddressAction::Increase      => self.add_to_register(register, &value),
      AddressAction::Decrease      => self.add_to_register(register, &-value),
      AddressAction::Enter         => self.set_register(register, value),
      AddressAction::EnterNegative => self.set_register(register, -value),
    }
  }

  fn device(&mut self, id: DeviceId) -> Result<&mut Box<dyn IODevice>, RunError> {
    self.devices
        .get_mut(id as usize)
        .and_then(|slot| slot.as_mut())
        .ok_or(RunError::UnknownDevice(id))
  }

  fn block_id(&self, id: DeviceId) -> DeviceBlockId {
    match is_direct_access(id) {
      true  => self.rx.value(),
      false => 0
    }
  }

  fn read_block(&mut self, command: &Command, id: DeviceId) -> Result<Flow, RunError> {
    let address = self.indexed_address(command)?;
    let block = self.block_id(id);

    let device = self.devices
        .get_mut(id as usize)
        .and_then(|slot| slot.as_mut())
        .ok_or(RunError::UnknownDevice(id))?;
    if !device.ready() {
      self.listener.on_wait_on_device(id);
      return Ok(Flow::Retry);
    }

    for k in 0..device.block_size() as WordValue {
      let word = device.read_next(block);
      self.memory.set(address + k, word)?;
      self.listener.on_memory_set(address + k);
    }
    self.listener.on_device_read(id, block);
    Ok(Flow::Next)
  }

  fn write_block(&mut self, command: &Command, id: DeviceId) -> Result<Flow, RunError> {
    let address = self.indexed_address(command)?;
    let block = self.block_id(id);

    let device = self.devices
        .get_mut(id as usize)
        .and_then(|slot| slot.as_mut())
        .ok_or(RunError::UnknownDevice(id))?;
    if !device.ready() {
      self.listener.on_wait_on_device(id);
      return Ok(Flow::Retry);
    }

    for k in 0..device.block_size() as WordValue {
      device.write_next(block, self.memory.get(address + k)?);
    }
    self.listener.on_device_write(id, block);
    Ok(Flow::Next)
  }

  // endregion
}

impl Default for Computer {
  fn default() -> Self {
    Computer::new()
  }
}

/// Shifts bytes towards the front (`left`) or back, filling with zero bytes.
fn shift_bytes(bytes: &mut [Byte], count: usize, left: bool) {
  let len = bytes.len();
  let count = std::cmp::min(count, len);
  match left {
    true  => {
      bytes.rotate_left(count);
      bytes[len - count..].iter_mut().for_each(|b| *b = Byte::MIN);
    }
    false => {
      bytes.rotate_right(count);
      bytes[..count].iter_mut().for_each(|b| *b = Byte::MIN);
    }
  }
}


lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

impl Display for Computer {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let mut rows = vec![
      ("rA".to_string(), format!("{}", self.ra)),
      ("rX".to_string(), format!("{}", self.rx)),
    ];
    for (i, register) in self.ri.iter().enumerate() {
      rows.push((format!("rI{}", i + 1), format!("{}", register)));
    }
    rows.push(("rJ".to_string(), format!("{}", self.rj)));

    let register_table = Computer::make_register_table(rows);
    let memory_table = self.make_memory_table();

    let mut combined_table = table!([register_table, memory_table]);

    combined_table.set_titles(row![ub->"Registers", ub->"Memory"]);
    combined_table.set_format(*TABLE_DISPLAY_FORMAT);

    write!(
      f,
      "Next: {:04}\tOverflow: {:?}\tComparison: {:?}\tState: {:?}\n{}",
      self.current_address, self.overflow, self.comparison, self.state, combined_table
    )
  }
}
