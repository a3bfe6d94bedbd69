//! Annotated word groups
//!
//! Words are batched into fixed-size groups; each group becomes one line of
//! bytes in the emitted array, preceded by one disassembly comment per word.

use crate::reader::RomWord;
use chip8_disassembler::disassemble_word;

/// A word with its disassembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedWord {
    pub address: u32,
    pub bytes: [u8; 2],
    /// Primary decode, empty when unrecognized
    pub text: String,
    /// Decode of the odd-aligned word starting at `address + 1`
    pub adjacent: Option<String>,
}

impl AnnotatedWord {
    pub fn new(word: &RomWord) -> Self {
        Self {
            address: word.address,
            bytes: word.bytes,
            text: disassemble_word(word.opcode()),
            adjacent: word.adjacent.map(disassemble_word),
        }
    }
}

/// One output line worth of words
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordGroup {
    pub words: Vec<AnnotatedWord>,
}

impl WordGroup {
    pub fn bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.words.iter().flat_map(|word| word.bytes)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Batches annotated words into groups of a fixed size
#[derive(Debug)]
pub struct GroupEmitter {
    words_per_group: usize,
    pending: WordGroup,
    groups: Vec<WordGroup>,
}

impl GroupEmitter {
    pub fn new(words_per_group: usize) -> Self {
        let words_per_group = words_per_group.max(1);
        Self {
            words_per_group,
            pending: WordGroup { words: Vec::with_capacity(words_per_group) },
            groups: Vec::new(),
        }
    }

    /// Annotate a word and append it to the current group
    pub fn push(&mut self, word: &RomWord) {
        self.pending.words.push(AnnotatedWord::new(word));
        if self.pending.len() == self.words_per_group {
            self.flush();
        }
    }

    /// Flush any partial group and return all groups in order
    pub fn finish(mut self) -> Vec<WordGroup> {
        self.flush();
        self.groups
    }

    fn flush(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let group = std::mem::replace(
            &mut self.pending,
            WordGroup { words: Vec::with_capacity(self.words_per_group) },
        );
        self.groups.push(group);
    }
}
