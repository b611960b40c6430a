//! NCBI codon tables.
//!
//! Tables are built once from [`ncbi::GENETIC_CODES`] into four views
//! (unambiguous/ambiguous × DNA/RNA letters). The process-wide copy returned by
//! [`tables`] is never mutated after construction.

mod ncbi;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::LazyLock;

use crate::alphabets::{dna, protein};
use crate::error::{BioError, BioResult};

/// Marker the tables use internally for stop codons.
pub const STOP: u8 = b'*';

const CODON_COUNT: usize = 64;

/// Which letters a table spells its codons with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flavor {
    Dna,
    Rna,
}

impl Flavor {
    const fn letters(self) -> [u8; 4] {
        match self {
            Flavor::Dna => *b"TCAG",
            Flavor::Rna => *b"UCAG",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonTable {
    id: u8,
    names: &'static [&'static str],
    residues: [u8; CODON_COUNT],
    starts: u64,
    flavor: Flavor,
    ambiguous: bool,
}

impl CodonTable {
    fn from_code(code: &ncbi::GeneticCode, flavor: Flavor, ambiguous: bool) -> Self {
        let mut starts = 0u64;
        for codon in code.starts {
            if let Some(idx) = codon_index(codon.as_bytes()) {
                starts |= 1 << idx;
            }
        }
        CodonTable {
            id: code.id,
            names: code.names,
            residues: *code.residues,
            starts,
            flavor,
            ambiguous,
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn names(&self) -> &'static [&'static str] {
        self.names
    }

    pub fn name(&self) -> &'static str {
        self.names.first().copied().unwrap_or("")
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }

    pub fn is_ambiguous(&self) -> bool {
        self.ambiguous
    }

    fn codon_string(&self, idx: usize) -> String {
        let letters = self.flavor.letters();
        [
            letters[idx >> 4] as char,
            letters[(idx >> 2) & 3] as char,
            letters[idx & 3] as char,
        ]
        .iter()
        .collect()
    }

    pub fn start_codons(&self) -> Vec<String> {
        (0..CODON_COUNT)
            .filter(|&i| self.starts & (1 << i) != 0)
            .map(|i| self.codon_string(i))
            .collect()
    }

    pub fn stop_codons(&self) -> Vec<String> {
        (0..CODON_COUNT)
            .filter(|&i| self.residues[i] == STOP)
            .map(|i| self.codon_string(i))
            .collect()
    }

    /// Every non-stop codon with its amino acid, in NCBI order.
    pub fn forward_table(&self) -> Vec<(String, char)> {
        (0..CODON_COUNT)
            .filter(|&i| self.residues[i] != STOP)
            .map(|i| (self.codon_string(i), self.residues[i] as char))
            .collect()
    }

    /// Amino acid for a codon. Stop codons are not part of the forward table.
    pub fn forward(&self, codon: &str) -> BioResult<char> {
        let masks = self.masks(codon.as_bytes(), false)?;
        match self.resolve(masks) {
            STOP => Err(BioError::StopCodonLookup {
                codon: codon.to_string(),
            }),
            aa => Ok(aa as char),
        }
    }

    /// Residue for a codon, `*` for stop codons.
    pub fn translate_codon(&self, codon: &[u8]) -> BioResult<u8> {
        let masks = self.masks(codon, false)?;
        Ok(self.resolve(masks))
    }

    pub fn is_start(&self, codon: &[u8]) -> bool {
        self.masks(codon, false)
            .map(|m| self.all_expansions(m, |i| self.starts & (1 << i) != 0))
            .unwrap_or(false)
    }

    pub fn is_stop(&self, codon: &[u8]) -> bool {
        self.masks(codon, false)
            .map(|m| self.all_expansions(m, |i| self.residues[i] == STOP))
            .unwrap_or(false)
    }

    /// Lookup used by sequence translation: accepts T and U, any case, and
    /// every IUPAC ambiguity code regardless of the table flavour.
    pub(crate) fn translate_any(&self, codon: &[u8]) -> BioResult<u8> {
        let masks = self.masks(codon, true)?;
        Ok(self.resolve(masks))
    }

    pub(crate) fn is_start_any(&self, codon: &[u8]) -> bool {
        self.masks(codon, true)
            .map(|m| self.all_expansions(m, |i| self.starts & (1 << i) != 0))
            .unwrap_or(false)
    }

    pub(crate) fn is_stop_any(&self, codon: &[u8]) -> bool {
        self.masks(codon, true)
            .map(|m| self.all_expansions(m, |i| self.residues[i] == STOP))
            .unwrap_or(false)
    }

    fn masks(&self, codon: &[u8], permissive: bool) -> BioResult<[u8; 3]> {
        let invalid = || BioError::InvalidCodon {
            codon: String::from_utf8_lossy(codon).into_owned(),
        };
        if codon.len() != 3 {
            return Err(invalid());
        }
        let mut masks = [0u8; 3];
        for (slot, &b) in masks.iter_mut().zip(codon) {
            let mask = dna::expansion_mask(b);
            if mask == 0 {
                return Err(invalid());
            }
            if !permissive {
                let wrong_letter = match self.flavor {
                    Flavor::Dna => b.eq_ignore_ascii_case(&b'U'),
                    Flavor::Rna => b.eq_ignore_ascii_case(&b'T'),
                };
                if wrong_letter || (!self.ambiguous && mask.count_ones() != 1) {
                    return Err(invalid());
                }
            }
            *slot = mask;
        }
        Ok(masks)
    }

    fn expansions(masks: [u8; 3]) -> impl Iterator<Item = usize> {
        let bits = |mask: u8| (0..4usize).filter(move |i| mask & (1u8 << *i) != 0);
        bits(masks[0]).flat_map(move |a| {
            bits(masks[1]).flat_map(move |b| bits(masks[2]).map(move |c| (a << 4) | (b << 2) | c))
        })
    }

    fn all_expansions<F>(&self, masks: [u8; 3], pred: F) -> bool
    where
        F: Fn(usize) -> bool,
    {
        Self::expansions(masks).all(pred)
    }

    fn resolve(&self, masks: [u8; 3]) -> u8 {
        let mut seen: Vec<u8> = Self::expansions(masks).map(|i| self.residues[i]).collect();
        seen.sort_unstable();
        seen.dedup();
        protein::ambiguity_code(&seen)
    }
}

impl fmt::Display for CodonTable {
    /// Four blocks of four rows: first base per block, second base per column,
    /// third base per row. Start codons are marked `(s)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters = self.flavor.letters();
        writeln!(f, "Table {} {}", self.id, self.names.join(", "))?;
        writeln!(f)?;
        write!(f, "  |")?;
        for &c2 in &letters {
            write!(f, "  {}      |", c2 as char)?;
        }
        let rule = "--+---------+---------+---------+---------+--";
        write!(f, "\n{rule}")?;
        for (i1, &c1) in letters.iter().enumerate() {
            for (i3, &c3) in letters.iter().enumerate() {
                write!(f, "\n{} |", c1 as char)?;
                for i2 in 0..4 {
                    let idx = (i1 << 4) | (i2 << 2) | i3;
                    let aa = self.residues[idx];
                    write!(f, " {}", self.codon_string(idx))?;
                    if aa == STOP {
                        write!(f, " Stop|")?;
                    } else if self.starts & (1 << idx) != 0 {
                        write!(f, " {}(s)|", aa as char)?;
                    } else {
                        write!(f, " {}   |", aa as char)?;
                    }
                }
                write!(f, " {}", c3 as char)?;
            }
            write!(f, "\n{rule}")?;
        }
        Ok(())
    }
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    match codon {
        [a, b, c] => Some(
            (dna::base_index(*a)? << 4) | (dna::base_index(*b)? << 2) | dna::base_index(*c)?,
        ),
        _ => None,
    }
}

/// How a caller names a codon table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableSelector<'a> {
    Id(u8),
    Name(&'a str),
    Table(&'a CodonTable),
}

impl Default for TableSelector<'_> {
    fn default() -> Self {
        TableSelector::Id(1)
    }
}

impl From<u8> for TableSelector<'_> {
    fn from(id: u8) -> Self {
        TableSelector::Id(id)
    }
}

impl<'a> From<&'a str> for TableSelector<'a> {
    fn from(name: &'a str) -> Self {
        TableSelector::Name(name)
    }
}

impl<'a> From<&'a CodonTable> for TableSelector<'a> {
    fn from(table: &'a CodonTable) -> Self {
        TableSelector::Table(table)
    }
}

/// One view of the tables, addressable by NCBI id or by any of a table's names.
#[derive(Clone, Debug)]
pub struct TableRegistry {
    by_id: BTreeMap<u8, CodonTable>,
    by_name: HashMap<String, u8>,
}

impl TableRegistry {
    fn build(flavor: Flavor, ambiguous: bool) -> Self {
        let mut by_id = BTreeMap::new();
        let mut by_name = HashMap::new();
        for code in ncbi::GENETIC_CODES {
            for name in code.names {
                by_name.insert(name.to_ascii_lowercase(), code.id);
            }
            by_id.insert(code.id, CodonTable::from_code(code, flavor, ambiguous));
        }
        TableRegistry { by_id, by_name }
    }

    pub fn by_id(&self, id: u8) -> BioResult<&CodonTable> {
        self.by_id.get(&id).ok_or(BioError::UnknownTableId { id })
    }

    /// Name lookup ignores ASCII case.
    pub fn by_name(&self, name: &str) -> BioResult<&CodonTable> {
        self.by_name
            .get(&name.to_ascii_lowercase())
            .and_then(|id| self.by_id.get(id))
            .ok_or_else(|| BioError::UnknownTableName {
                name: name.to_string(),
            })
    }

    pub fn get<'a>(&'a self, selector: TableSelector<'a>) -> BioResult<&'a CodonTable> {
        match selector {
            TableSelector::Id(id) => self.by_id(id),
            TableSelector::Name(name) => self.by_name(name),
            TableSelector::Table(table) => Ok(table),
        }
    }

    pub fn ids(&self) -> impl Iterator<Item = u8> + '_ {
        self.by_id.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodonTable> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Clone, Debug)]
pub struct CodonTables {
    pub unambiguous_dna: TableRegistry,
    pub unambiguous_rna: TableRegistry,
    pub ambiguous_dna: TableRegistry,
    pub ambiguous_rna: TableRegistry,
}

impl CodonTables {
    /// Build every view from the NCBI reference data.
    pub fn ncbi() -> Self {
        CodonTables {
            unambiguous_dna: TableRegistry::build(Flavor::Dna, false),
            unambiguous_rna: TableRegistry::build(Flavor::Rna, false),
            ambiguous_dna: TableRegistry::build(Flavor::Dna, true),
            ambiguous_rna: TableRegistry::build(Flavor::Rna, true),
        }
    }
}

static TABLES: LazyLock<CodonTables> = LazyLock::new(|| {
    let tables = CodonTables::ncbi();
    tracing::debug!(
        count = tables.unambiguous_dna.len(),
        "built NCBI codon tables"
    );
    tables
});

/// Process-wide codon tables.
pub fn tables() -> &'static CodonTables {
    &TABLES
}
