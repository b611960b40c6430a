//! Alphabet tags and the symbol sets behind them.
//!
//! An [`Alphabet`] is a small `Copy` tag: a position in a fixed refinement tree
//! ([`AlphabetKind`]) plus an optional stop marker. Compatibility between two
//! tags is decided by walking that tree, never by inspecting residues.

pub mod dna;
pub mod protein;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use crate::error::{BioError, BioResult};

/// Set of byte symbols, used to check residues against a strict alphabet.
#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct SymbolSet {
    pub symbols: BitSet,
}

impl SymbolSet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        SymbolSet { symbols: s }
    }

    pub fn insert(&mut self, a: u8) {
        self.symbols.insert(a as usize);
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .all(|c| self.symbols.contains(*c.borrow() as usize))
    }

    /// Position and value of the first symbol not in the set.
    pub fn first_invalid(&self, text: &[u8]) -> Option<(usize, u8)> {
        text.iter()
            .enumerate()
            .find(|(_, &b)| !self.contains(b))
            .map(|(pos, &b)| (pos, b))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// The fixed catalog of alphabet tags.
///
/// Every kind except `Generic` has exactly one parent; see [`AlphabetKind::parent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AlphabetKind {
    Generic,
    Nucleotide,
    Dna,
    Rna,
    Protein,
    AmbiguousDna,
    UnambiguousDna,
    ExtendedDna,
    AmbiguousRna,
    UnambiguousRna,
    ExtendedProtein,
    IupacProtein,
}

impl AlphabetKind {
    pub const fn parent(self) -> Option<AlphabetKind> {
        use AlphabetKind::*;
        match self {
            Generic => None,
            Nucleotide | Protein => Some(Generic),
            Dna | Rna => Some(Nucleotide),
            AmbiguousDna | ExtendedDna => Some(Dna),
            UnambiguousDna => Some(AmbiguousDna),
            AmbiguousRna => Some(Rna),
            UnambiguousRna => Some(AmbiguousRna),
            ExtendedProtein => Some(Protein),
            IupacProtein => Some(ExtendedProtein),
        }
    }

    /// `self` is `other` or one of its descendants.
    pub fn refines(self, other: AlphabetKind) -> bool {
        let mut cur = Some(self);
        while let Some(kind) = cur {
            if kind == other {
                return true;
            }
            cur = kind.parent();
        }
        false
    }

    fn depth(self) -> usize {
        let mut depth = 0;
        let mut cur = self.parent();
        while let Some(kind) = cur {
            depth += 1;
            cur = kind.parent();
        }
        depth
    }

    /// Least common ancestor in the refinement tree.
    pub fn join(self, other: AlphabetKind) -> AlphabetKind {
        let (mut a, mut b) = (self, other);
        let (mut da, mut db) = (a.depth(), b.depth());
        while da > db {
            a = a.parent().unwrap_or(AlphabetKind::Generic);
            da -= 1;
        }
        while db > da {
            b = b.parent().unwrap_or(AlphabetKind::Generic);
            db -= 1;
        }
        while a != b {
            a = a.parent().unwrap_or(AlphabetKind::Generic);
            b = b.parent().unwrap_or(AlphabetKind::Generic);
        }
        a
    }

    pub fn is_nucleotide(self) -> bool {
        self.refines(AlphabetKind::Nucleotide)
    }

    pub fn is_dna(self) -> bool {
        self.refines(AlphabetKind::Dna)
    }

    pub fn is_rna(self) -> bool {
        self.refines(AlphabetKind::Rna)
    }

    pub fn is_protein(self) -> bool {
        self.refines(AlphabetKind::Protein)
    }

    /// IUPAC tags carry an explicit, upper-case-only symbol set.
    pub fn is_iupac(self) -> bool {
        use AlphabetKind::*;
        matches!(
            self,
            AmbiguousDna
                | UnambiguousDna
                | ExtendedDna
                | AmbiguousRna
                | UnambiguousRna
                | ExtendedProtein
                | IupacProtein
        )
    }

    const fn name(self) -> &'static str {
        use AlphabetKind::*;
        match self {
            Generic => "generic",
            Nucleotide => "nucleotide",
            Dna => "dna",
            Rna => "rna",
            Protein => "protein",
            AmbiguousDna => "ambiguous_dna",
            UnambiguousDna => "unambiguous_dna",
            ExtendedDna => "extended_dna",
            AmbiguousRna => "ambiguous_rna",
            UnambiguousRna => "unambiguous_rna",
            ExtendedProtein => "extended_protein",
            IupacProtein => "iupac_protein",
        }
    }

    const ALL: [AlphabetKind; 12] = [
        AlphabetKind::Generic,
        AlphabetKind::Nucleotide,
        AlphabetKind::Dna,
        AlphabetKind::Rna,
        AlphabetKind::Protein,
        AlphabetKind::AmbiguousDna,
        AlphabetKind::UnambiguousDna,
        AlphabetKind::ExtendedDna,
        AlphabetKind::AmbiguousRna,
        AlphabetKind::UnambiguousRna,
        AlphabetKind::ExtendedProtein,
        AlphabetKind::IupacProtein,
    ];
}

/// Alphabet tag attached to every sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Alphabet {
    kind: AlphabetKind,
    stop: Option<u8>,
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet::GENERIC
    }
}

impl Alphabet {
    pub const GENERIC: Alphabet = Alphabet::of(AlphabetKind::Generic);
    pub const NUCLEOTIDE: Alphabet = Alphabet::of(AlphabetKind::Nucleotide);
    pub const DNA: Alphabet = Alphabet::of(AlphabetKind::Dna);
    pub const RNA: Alphabet = Alphabet::of(AlphabetKind::Rna);
    pub const PROTEIN: Alphabet = Alphabet::of(AlphabetKind::Protein);
    pub const AMBIGUOUS_DNA: Alphabet = Alphabet::of(AlphabetKind::AmbiguousDna);
    pub const UNAMBIGUOUS_DNA: Alphabet = Alphabet::of(AlphabetKind::UnambiguousDna);
    pub const EXTENDED_DNA: Alphabet = Alphabet::of(AlphabetKind::ExtendedDna);
    pub const AMBIGUOUS_RNA: Alphabet = Alphabet::of(AlphabetKind::AmbiguousRna);
    pub const UNAMBIGUOUS_RNA: Alphabet = Alphabet::of(AlphabetKind::UnambiguousRna);
    pub const EXTENDED_PROTEIN: Alphabet = Alphabet::of(AlphabetKind::ExtendedProtein);
    pub const IUPAC_PROTEIN: Alphabet = Alphabet::of(AlphabetKind::IupacProtein);

    pub const fn of(kind: AlphabetKind) -> Self {
        Alphabet { kind, stop: None }
    }

    pub const fn kind(self) -> AlphabetKind {
        self.kind
    }

    /// The "has stop codon" variant of this alphabet.
    pub const fn with_stop(self, symbol: u8) -> Self {
        Alphabet {
            kind: self.kind,
            stop: Some(symbol),
        }
    }

    pub const fn without_stop(self) -> Self {
        Alphabet::of(self.kind)
    }

    pub const fn stop_symbol(self) -> Option<u8> {
        self.stop
    }

    pub fn parent(self) -> Option<Alphabet> {
        self.kind.parent().map(Alphabet::of)
    }

    pub fn is_nucleotide(self) -> bool {
        self.kind.is_nucleotide()
    }

    pub fn is_dna(self) -> bool {
        self.kind.is_dna()
    }

    pub fn is_rna(self) -> bool {
        self.kind.is_rna()
    }

    pub fn is_protein(self) -> bool {
        self.kind.is_protein()
    }

    pub fn is_generic(self) -> bool {
        self.kind == AlphabetKind::Generic
    }

    pub fn refines(self, other: Alphabet) -> bool {
        self.kind.refines(other.kind)
    }

    /// Whether two alphabets may be combined.
    ///
    /// DNA never mixes with RNA, and nucleotides never mix with proteins.
    /// The generic tag mixes with anything.
    pub fn compatible(self, other: Alphabet) -> bool {
        let (a, b) = (self.kind, other.kind);
        if (a.is_nucleotide() && b.is_protein()) || (a.is_protein() && b.is_nucleotide()) {
            return false;
        }
        if (a.is_dna() && b.is_rna()) || (a.is_rna() && b.is_dna()) {
            return false;
        }
        match (self.stop, other.stop) {
            (Some(x), Some(y)) => x == y,
            _ => true,
        }
    }

    /// Alphabet of `self + other`: the nearest common ancestor of both tags.
    pub fn join(self, other: Alphabet) -> BioResult<Alphabet> {
        if self == other {
            return Ok(self);
        }
        if !self.compatible(other) {
            return Err(BioError::AlphabetMismatch {
                left: self,
                right: other,
            });
        }
        Ok(Alphabet {
            kind: self.kind.join(other.kind),
            stop: self.stop.or(other.stop),
        })
    }

    /// Strict symbol set for IUPAC tags; generic tags accept anything.
    pub fn letters(self) -> Option<SymbolSet> {
        use AlphabetKind::*;
        let mut set = match self.kind {
            UnambiguousDna => dna::unambiguous_letters(),
            AmbiguousDna => dna::ambiguous_letters(),
            ExtendedDna => dna::extended_letters(),
            UnambiguousRna => rna::unambiguous_letters(),
            AmbiguousRna => rna::ambiguous_letters(),
            IupacProtein => protein::iupac_letters(),
            ExtendedProtein => protein::extended_letters(),
            Generic | Nucleotide | Dna | Rna | Protein => return None,
        };
        if let Some(stop) = self.stop {
            set.insert(stop);
        }
        Some(set)
    }

    /// Symbol used to fill sequences of unknown content.
    pub fn placeholder(self) -> u8 {
        if self.is_nucleotide() {
            b'N'
        } else if self.is_protein() {
            b'X'
        } else {
            b'?'
        }
    }

    /// Strict IUPAC tags are upper case only; lowering a sequence falls back to
    /// the generic tag of the same family.
    pub fn case_relaxed(self) -> Alphabet {
        let kind = if !self.kind.is_iupac() {
            self.kind
        } else if self.kind.is_dna() {
            AlphabetKind::Dna
        } else if self.kind.is_rna() {
            AlphabetKind::Rna
        } else {
            AlphabetKind::Protein
        };
        Alphabet {
            kind,
            stop: self.stop,
        }
    }

    /// Tag of the transcript of a sequence in this alphabet.
    pub fn transcribed(self) -> BioResult<Alphabet> {
        use AlphabetKind::*;
        let kind = match self.kind {
            _ if self.is_protein() => return Err(BioError::NotDna { op: "transcribe" }),
            _ if self.is_rna() => return Err(BioError::NotDna { op: "transcribe" }),
            UnambiguousDna => UnambiguousRna,
            AmbiguousDna => AmbiguousRna,
            _ => Rna,
        };
        Ok(Alphabet::of(kind))
    }

    /// Tag of the back-transcript of a sequence in this alphabet.
    pub fn back_transcribed(self) -> BioResult<Alphabet> {
        use AlphabetKind::*;
        let kind = match self.kind {
            _ if self.is_protein() => {
                return Err(BioError::NotRna {
                    op: "back_transcribe",
                })
            }
            _ if self.is_dna() => {
                return Err(BioError::NotRna {
                    op: "back_transcribe",
                })
            }
            UnambiguousRna => UnambiguousDna,
            AmbiguousRna => AmbiguousDna,
            _ => Dna,
        };
        Ok(Alphabet::of(kind))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.stop {
            Some(stop) => write!(f, "{}+stop('{}')", self.kind.name(), stop as char),
            None => f.write_str(self.kind.name()),
        }
    }
}

impl FromStr for Alphabet {
    type Err = BioError;

    fn from_str(s: &str) -> BioResult<Self> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        AlphabetKind::ALL
            .iter()
            .find(|kind| kind.name() == wanted)
            .map(|&kind| Alphabet::of(kind))
            .ok_or_else(|| BioError::UnknownAlphabet {
                name: s.to_string(),
            })
    }
}

/// Free-function forms of the alphabet checks.
pub fn is_nucleotide(alphabet: Alphabet) -> bool {
    alphabet.is_nucleotide()
}

pub fn is_protein(alphabet: Alphabet) -> bool {
    alphabet.is_protein()
}

pub fn compatible(a: Alphabet, b: Alphabet) -> bool {
    a.compatible(b)
}
