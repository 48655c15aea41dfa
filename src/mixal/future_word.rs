use crate::field::WordField;
use crate::mixal::Address;
use crate::word::{Word, WordValue};

/// Index of a word in the translator's arena. Stays valid for the translator's lifetime.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct FutureWordId(pub(crate) usize);

/// A finished word and the address it belongs at.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TranslatedWord {
  pub original_address : WordValue,
  pub value            : Word,
}

/// Result of `END`: where execution starts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EndCode {
  pub start_address: WordValue,
}

/**
  A translated command whose address may still depend on symbols defined later. Until it is
  resolved the address part of `value` is zero and the address operand is kept.
*/
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FutureTranslatedWord {
  original_address   : WordValue,
  value              : Word,
  unresolved_address : Option<Address>,
}

impl FutureTranslatedWord {

  pub(crate) fn ready(original_address: WordValue, value: Word) -> FutureTranslatedWord {
    FutureTranslatedWord { original_address, value, unresolved_address: None }
  }

  pub(crate) fn pending(original_address: WordValue, value: Word, address: Address)
    -> FutureTranslatedWord
  {
    FutureTranslatedWord { original_address, value, unresolved_address: Some(address) }
  }

  pub fn is_ready(&self) -> bool {
    self.unresolved_address.is_none()
  }

  pub fn original_address(&self) -> WordValue {
    self.original_address
  }

  /// The command word, with a zero address part while unresolved.
  pub fn value(&self) -> &Word {
    &self.value
  }

  pub fn unresolved_address(&self) -> Option<&Address> {
    self.unresolved_address.as_ref()
  }

  pub fn translated(&self) -> Option<TranslatedWord> {
    match self.is_ready() {
      true  => Some(TranslatedWord { original_address: self.original_address, value: self.value }),
      false => None
    }
  }

  /// Patches the address part. `address` has been range checked by the translator.
  pub(crate) fn resolve(&mut self, address: &Word) {
    self.value.set_field(address, WordField::address(), true);
    self.unresolved_address = None;
  }
}
