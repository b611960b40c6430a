//! Codon translation of nucleotide sequences.

use tracing::warn;

use crate::alphabets::{Alphabet, AlphabetKind};
use crate::codon::{tables, CodonTable, TableSelector, STOP};
use crate::error::{BioError, BioResult};
use crate::seq::{Residues, Seq, SeqRead};

/// Settings for [`Seq::translate`].
///
/// ```
/// use bioseq_core::seq::{Seq, TranslateOptions};
///
/// let opts = TranslateOptions::new().table("Bacterial").cds(true);
/// let protein = Seq::from("GTGAAATAA").translate(&opts).unwrap();
/// assert_eq!(protein, "MK");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TranslateOptions<'a> {
    pub table: TableSelector<'a>,
    pub stop_symbol: u8,
    pub to_stop: bool,
    pub cds: bool,
    pub gap: Option<u8>,
}

impl Default for TranslateOptions<'_> {
    fn default() -> Self {
        TranslateOptions {
            table: TableSelector::default(),
            stop_symbol: STOP,
            to_stop: false,
            cds: false,
            gap: None,
        }
    }
}

impl<'a> TranslateOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table(mut self, table: impl Into<TableSelector<'a>>) -> Self {
        self.table = table.into();
        self
    }

    pub fn stop_symbol(mut self, symbol: u8) -> Self {
        self.stop_symbol = symbol;
        self
    }

    /// Stop before the first in-frame stop codon.
    pub fn to_stop(mut self, to_stop: bool) -> Self {
        self.to_stop = to_stop;
        self
    }

    /// Require a complete coding sequence.
    pub fn cds(mut self, cds: bool) -> Self {
        self.cds = cds;
        self
    }

    /// Codons made only of `gap` translate to `gap`.
    pub fn gap(mut self, gap: u8) -> Self {
        self.gap = Some(gap);
        self
    }

    fn resolve_table(&self) -> BioResult<&'a CodonTable> {
        match self.table {
            TableSelector::Table(table) => Ok(table),
            TableSelector::Id(id) => tables().ambiguous_dna.by_id(id),
            TableSelector::Name(name) => tables().ambiguous_dna.by_name(name),
        }
    }
}

impl Seq {
    /// Translate codon by codon from position 0.
    ///
    /// A trailing partial codon is dropped. Placeholder sequences translate to
    /// a placeholder of `len / 3` residues; their codons are never treated as
    /// stop codons.
    pub fn translate(&self, opts: &TranslateOptions<'_>) -> BioResult<Seq> {
        if self.alphabet().is_protein() {
            return Err(BioError::ProteinTranslation);
        }
        let table = opts.resolve_table()?;
        let len = self.len();
        if !opts.cds && len % 3 != 0 {
            warn!(
                len,
                dropped = len % 3,
                "sequence length is not a multiple of three, trailing partial codon ignored"
            );
        }

        if let (Residues::Placeholder { symbol, .. }, false) = (self.storage(), opts.cds) {
            let aa = match opts.gap {
                Some(gap) if gap == *symbol => gap,
                _ => match table.translate_any(&[*symbol; 3]) {
                    Ok(STOP) | Err(_) => b'X',
                    Ok(aa) => aa,
                },
            };
            let alphabet = protein_alphabet(self.alphabet(), false, opts.stop_symbol);
            return Ok(Seq::unknown_with(len / 3, alphabet, aa));
        }

        let protein = translate_residues(&self.residues(), table, opts)?;
        let has_stop = protein.contains(&opts.stop_symbol);
        let alphabet = protein_alphabet(self.alphabet(), has_stop, opts.stop_symbol);
        Ok(Seq::new(protein, alphabet))
    }
}

pub(crate) fn translate_residues(
    residues: &[u8],
    table: &CodonTable,
    opts: &TranslateOptions<'_>,
) -> BioResult<Vec<u8>> {
    let mut codons = residues;
    let mut protein = Vec::with_capacity(residues.len() / 3);

    if opts.cds {
        codons = validate_cds(residues, table)?;
        protein.push(b'M');
    }

    for codon in codons.chunks_exact(3) {
        if let Some(gap) = opts.gap {
            if codon.iter().all(|&b| b == gap) {
                protein.push(gap);
                continue;
            }
        }
        match table.translate_any(codon)? {
            STOP if opts.cds => {
                return Err(BioError::InvalidCds {
                    msg: "extra in frame stop codon found".to_string(),
                })
            }
            STOP if opts.to_stop => break,
            STOP => protein.push(opts.stop_symbol),
            aa => protein.push(aa),
        }
    }

    Ok(protein)
}

/// Checks the outer codons of a coding sequence and returns the codons between them.
fn validate_cds<'s>(residues: &'s [u8], table: &CodonTable) -> BioResult<&'s [u8]> {
    let len = residues.len();
    if len % 3 != 0 {
        return Err(BioError::InvalidCds {
            msg: format!("sequence length {len} is not a multiple of three"),
        });
    }
    if len < 6 {
        return Err(BioError::InvalidCds {
            msg: format!("sequence length {len} is too short to hold a start and a stop codon"),
        });
    }
    let (first, last) = (&residues[..3], &residues[len - 3..]);
    if !table.is_start_any(first) {
        return Err(BioError::InvalidCds {
            msg: format!(
                "first codon '{}' is not a start codon",
                String::from_utf8_lossy(first)
            ),
        });
    }
    if !table.is_stop_any(last) {
        return Err(BioError::InvalidCds {
            msg: format!(
                "final codon '{}' is not a stop codon",
                String::from_utf8_lossy(last)
            ),
        });
    }
    Ok(&residues[3..len - 3])
}

/// Alphabet of a translation product.
fn protein_alphabet(input: Alphabet, has_stop: bool, stop_symbol: u8) -> Alphabet {
    use AlphabetKind::*;
    let protein = match input.kind() {
        UnambiguousDna | UnambiguousRna => Alphabet::IUPAC_PROTEIN,
        AmbiguousDna | ExtendedDna | AmbiguousRna => Alphabet::EXTENDED_PROTEIN,
        _ => Alphabet::PROTEIN,
    };
    if has_stop {
        protein.with_stop(stop_symbol)
    } else {
        protein
    }
}
