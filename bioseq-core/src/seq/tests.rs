use super::*;
use crate::codon::tables;
use proptest::prelude::*;
use std::collections::HashSet;

const TUTORIAL: &str = "GATCGATGGGCCTATATAGGATCGAAAATCGC";
const CODING: &str = "ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG";

fn dna(s: &str) -> Seq {
    Seq::new(s, Alphabet::UNAMBIGUOUS_DNA)
}

// ─── reading ────────────────────────────────────────────────

#[test]
fn length_and_indexing() {
    let s = dna(TUTORIAL);
    assert_eq!(s.len(), 32);
    assert_eq!(s.get(0).unwrap(), b'G');
    assert_eq!(s.get(-1).unwrap(), b'C');
    assert_eq!(
        s.get(32),
        Err(BioError::IndexOutOfRange { index: 32, len: 32 })
    );
    assert_eq!(s.iter().filter(|&b| b == b'G').count(), 9);
}

#[test]
fn slicing_follows_python_rules() {
    let s = dna(TUTORIAL);
    let sub = s.slice(Some(4), Some(12), None).unwrap();
    assert_eq!(sub, "GATGGGCC");
    assert_eq!(sub.alphabet(), Alphabet::UNAMBIGUOUS_DNA);

    let reversed: String = TUTORIAL.chars().rev().collect();
    assert_eq!(s.slice(None, None, Some(-1)).unwrap(), reversed.as_str());
    assert_eq!(s.slice(Some(0), None, Some(3)).unwrap(), "GCTGTAGTAAG");
    assert_eq!(s.slice(Some(1), None, Some(3)).unwrap(), "AGGCATGCATC");
    assert_eq!(s.slice(Some(2), None, Some(3)).unwrap(), "TAGCTAAGAC");
    assert_eq!(s.slice(None, None, Some(0)), Err(BioError::ZeroSliceStep));
}

#[test]
fn count_is_non_overlapping() {
    let s = Seq::from("AAAA");
    assert_eq!(s.count("AA").unwrap(), 2);
    assert_eq!(s.count_overlap("AA").unwrap(), 3);
    assert_eq!(s.count(b'A').unwrap(), 4);
    assert_eq!(s.count(&Seq::from("AA")).unwrap(), 2);
    assert_eq!(dna(TUTORIAL).count("G").unwrap(), 9);
}

#[test]
fn searching() {
    let s = dna("GATCGATG");
    assert_eq!(s.find("AT", None, None).unwrap(), Some(1));
    assert_eq!(s.find("AT", Some(2), None).unwrap(), Some(5));
    assert_eq!(s.find("AT", Some(-2), None).unwrap(), None);
    assert_eq!(s.rfind("AT", None, None).unwrap(), Some(5));
    assert_eq!(s.rfind("AT", None, Some(5)).unwrap(), Some(1));
    assert!(s.contains(&Seq::from("CGA")).unwrap());
    assert!(!s.contains("TTT").unwrap());
    assert!(s.starts_with("GAT").unwrap());
    assert!(s.ends_with('G').unwrap());
    assert!(!s.ends_with("GAT").unwrap());
}

#[test]
fn display_and_string_equality() {
    let s = dna("ACGT");
    assert_eq!(s.to_string(), "ACGT");
    assert_eq!(s, "ACGT");
    assert_ne!(s, "ACG");
}

#[test]
fn equality_ignores_alphabet() {
    let strict = dna("ACGT");
    let loose = Seq::generic("ACGT");
    assert_eq!(strict, loose);

    let mut set = HashSet::new();
    set.insert(strict);
    assert!(set.contains(&loose));
    assert!(!set.contains(&Seq::generic("ACGA")));
}

#[test]
fn validation_is_advisory() {
    let s = dna("ACGU");
    assert_eq!(s.validate(), Err(BioError::InvalidChar { ch: 'U', pos: 3 }));
    assert_eq!(s.len(), 4);
    assert!(Seq::generic("anything goes").validate().is_ok());
    assert!(Seq::new("MKV*", Alphabet::IUPAC_PROTEIN.with_stop(b'*'))
        .validate()
        .is_ok());
}

// ─── case and concatenation ─────────────────────────────────

#[test]
fn lower_relaxes_strict_alphabets() {
    let lowered = dna("ACGT").lower();
    assert_eq!(lowered, "acgt");
    assert_eq!(lowered.alphabet(), Alphabet::DNA);

    let raised = lowered.upper();
    assert_eq!(raised, "ACGT");
    assert_eq!(raised.alphabet(), Alphabet::DNA);
}

#[test]
fn concatenation_joins_alphabets() {
    let a = dna("ACGT");
    let b = Seq::new("NNRY", Alphabet::AMBIGUOUS_DNA);
    let joined = a.concat(&b).unwrap();
    assert_eq!(joined, "ACGTNNRY");
    assert_eq!(joined.alphabet(), Alphabet::AMBIGUOUS_DNA);

    let same = a.concat(&dna("TT")).unwrap();
    assert_eq!(same.alphabet(), Alphabet::UNAMBIGUOUS_DNA);

    let text = a.concat_str("gg");
    assert_eq!(text, "ACGTgg");
    assert_eq!(text.alphabet(), Alphabet::UNAMBIGUOUS_DNA);
}

#[test]
fn protein_and_dna_do_not_mix() {
    let protein = Seq::new("EVRNAK", Alphabet::IUPAC_PROTEIN);
    let nuc = dna("ACGT");
    assert_eq!(
        protein.concat(&nuc),
        Err(BioError::AlphabetMismatch {
            left: Alphabet::IUPAC_PROTEIN,
            right: Alphabet::UNAMBIGUOUS_DNA,
        })
    );

    let protein = protein.with_alphabet(Alphabet::GENERIC);
    let nuc = nuc.with_alphabet(Alphabet::GENERIC);
    let joined = protein.concat(&nuc).unwrap();
    assert_eq!(joined, "EVRNAKACGT");
    assert_eq!(joined.alphabet(), Alphabet::GENERIC);
}

#[test]
fn dna_and_rna_do_not_mix() {
    let rna = Seq::new("AUG", Alphabet::RNA);
    assert!(matches!(
        dna("ATG").concat(&rna),
        Err(BioError::AlphabetMismatch { .. })
    ));
}

// ─── complement and transcription ───────────────────────────

#[test]
fn complement_covers_ambiguity_codes() {
    let s = Seq::new("ACGTRYN", Alphabet::AMBIGUOUS_DNA);
    assert_eq!(s.complement().unwrap(), "TGCAYRN");
    assert_eq!(s.reverse_complement().unwrap(), "NRYACGT");
    assert_eq!(
        s.reverse_complement().unwrap().alphabet(),
        Alphabet::AMBIGUOUS_DNA
    );
    assert_eq!(Seq::new("acgt", Alphabet::DNA).complement().unwrap(), "tgca");
}

#[test]
fn complement_infers_rna_from_content() {
    assert_eq!(Seq::generic("AUGC").complement().unwrap(), "UACG");
    assert_eq!(Seq::generic("ATGC").complement().unwrap(), "TACG");
    assert_eq!(
        Seq::generic("ATUG").complement(),
        Err(BioError::MixedNucleotides)
    );
    assert_eq!(
        Seq::new("AUGC", Alphabet::RNA).reverse_complement().unwrap(),
        "GCAU"
    );
}

#[test]
fn proteins_have_no_complement() {
    let s = Seq::new("EVRNAK", Alphabet::PROTEIN);
    assert_eq!(
        s.complement(),
        Err(BioError::NotNucleotide { op: "complement" })
    );
    assert!(s.reverse_complement().is_err());
}

#[test]
fn transcription_switches_alphabet() {
    let coding = dna("ATGGCCATTGTAATGGGCCGCTGAAAGGGTGCCCGATAG");
    let mrna = coding.transcribe().unwrap();
    assert_eq!(mrna, "AUGGCCAUUGUAAUGGGCCGCUGAAAGGGUGCCCGAUAG");
    assert_eq!(mrna.alphabet(), Alphabet::UNAMBIGUOUS_RNA);

    let back = mrna.back_transcribe().unwrap();
    assert_eq!(back, coding);
    assert_eq!(back.alphabet(), Alphabet::UNAMBIGUOUS_DNA);

    assert_eq!(
        mrna.transcribe(),
        Err(BioError::NotDna { op: "transcribe" })
    );
    assert!(coding.back_transcribe().is_err());
    assert!(Seq::new("MK", Alphabet::PROTEIN).transcribe().is_err());
}

// ─── translation ────────────────────────────────────────────

#[test]
fn translate_standard_table() {
    let protein = dna(CODING).translate(&TranslateOptions::default()).unwrap();
    assert_eq!(protein, "MAIVMGR*KGAR*");
    assert_eq!(
        protein.alphabet(),
        Alphabet::IUPAC_PROTEIN.with_stop(b'*')
    );
}

#[test]
fn translate_to_stop() {
    let opts = TranslateOptions::new().to_stop(true);
    let protein = dna(CODING).translate(&opts).unwrap();
    assert_eq!(protein, "MAIVMGR");
    assert_eq!(protein.alphabet(), Alphabet::IUPAC_PROTEIN);
}

#[test]
fn translate_other_tables() {
    let by_id = dna(CODING).translate(&TranslateOptions::new().table(2u8)).unwrap();
    assert_eq!(by_id, "MAIVMGRWKGAR*");

    let opts = TranslateOptions::new().table("Vertebrate Mitochondrial");
    assert_eq!(dna(CODING).translate(&opts).unwrap(), "MAIVMGRWKGAR*");

    let table = tables().unambiguous_dna.by_id(2).unwrap();
    let opts = TranslateOptions::new().table(table).to_stop(true);
    assert_eq!(dna(CODING).translate(&opts).unwrap(), "MAIVMGRWKGAR");

    assert_eq!(
        dna(CODING).translate(&TranslateOptions::new().table(7u8)),
        Err(BioError::UnknownTableId { id: 7 })
    );
}

#[test]
fn translate_custom_stop_symbol() {
    let opts = TranslateOptions::new().stop_symbol(b'@');
    let protein = dna(CODING).translate(&opts).unwrap();
    assert_eq!(protein, "MAIVMGR@KGAR@");
    assert_eq!(protein.alphabet().stop_symbol(), Some(b'@'));
}

#[test]
fn translate_rna_and_mixed_case() {
    let rna = Seq::new("AUGGCCUAA", Alphabet::UNAMBIGUOUS_RNA);
    assert_eq!(rna.translate(&TranslateOptions::default()).unwrap(), "MA*");
    let lower = Seq::new("atggcc", Alphabet::DNA);
    let protein = lower.translate(&TranslateOptions::default()).unwrap();
    assert_eq!(protein, "MA");
    assert_eq!(protein.alphabet(), Alphabet::PROTEIN);
}

#[test]
fn translate_drops_partial_codon() {
    let protein = dna("ATGGC").translate(&TranslateOptions::default()).unwrap();
    assert_eq!(protein, "M");
}

#[test]
fn translate_ambiguous_codons() {
    let s = Seq::new("GGNTARRAYNNN", Alphabet::AMBIGUOUS_DNA);
    let protein = s.translate(&TranslateOptions::default()).unwrap();
    assert_eq!(protein, "G*BX");
    assert_eq!(
        protein.alphabet(),
        Alphabet::EXTENDED_PROTEIN.with_stop(b'*')
    );
}

#[test]
fn translate_gaps() {
    let opts = TranslateOptions::new().gap(b'-');
    assert_eq!(dna("ATG---GCC").translate(&opts).unwrap(), "M-A");
    assert!(matches!(
        dna("ATGA-GGCC").translate(&opts),
        Err(BioError::InvalidCodon { .. })
    ));
    assert!(dna("ATG---").translate(&TranslateOptions::default()).is_err());
}

#[test]
fn proteins_cannot_be_translated() {
    let s = Seq::new("MKV", Alphabet::IUPAC_PROTEIN);
    assert_eq!(
        s.translate(&TranslateOptions::default()),
        Err(BioError::ProteinTranslation)
    );
}

#[test]
fn cds_forces_methionine() {
    let s = dna("GTGAAACTTTAA");
    let bacterial = TranslateOptions::new().table("Bacterial");
    assert_eq!(s.translate(&bacterial).unwrap(), "VKL*");
    assert_eq!(s.translate(&bacterial.cds(true)).unwrap(), "MKL");

    let standard_cds = TranslateOptions::new().cds(true);
    assert_eq!(dna("TTGAAATAA").translate(&standard_cds).unwrap(), "MK");
}

#[test]
fn cds_rejects_invalid_sequences() {
    let opts = TranslateOptions::new().cds(true);
    let rejects = |s: &str| matches!(dna(s).translate(&opts), Err(BioError::InvalidCds { .. }));

    assert!(rejects("GTGAAATAA"), "GTG is not a standard start codon");
    assert!(rejects("ATGAAATA"), "length not a multiple of three");
    assert!(rejects("ATGAAAAAA"), "no terminal stop codon");
    assert!(rejects("ATGTAAAAATAA"), "internal stop codon");
    assert!(rejects("TAA"), "too short");
}

// ─── unknown sequences ──────────────────────────────────────

#[test]
fn unknown_sequence_reads_without_a_buffer() {
    let s = Seq::unknown(20, Alphabet::AMBIGUOUS_DNA);
    assert!(s.is_unknown());
    assert_eq!(s.len(), 20);
    assert_eq!(s.to_string(), "N".repeat(20));
    assert_eq!(s.get(-1).unwrap(), b'N');
    assert_eq!(s.count("NN").unwrap(), 10);
    assert_eq!(s.count_overlap("NN").unwrap(), 19);
    assert!(s.starts_with("NNN").unwrap());
    assert!(!s.contains("A").unwrap());

    let sub = s.slice(Some(2), Some(5), None).unwrap();
    assert!(sub.is_unknown());
    assert_eq!(sub.len(), 3);
}

#[test]
fn unknown_sequence_placeholders() {
    assert_eq!(Seq::unknown(3, Alphabet::PROTEIN).to_string(), "XXX");
    assert_eq!(Seq::unknown(3, Alphabet::GENERIC).to_string(), "???");
    assert_eq!(
        Seq::unknown_with(2, Alphabet::DNA, b'A').to_string(),
        "AA"
    );
}

#[test]
fn unknown_sequence_translates_to_unknown_protein() {
    let s = Seq::unknown(20, Alphabet::AMBIGUOUS_DNA);
    let protein = s.translate(&TranslateOptions::default()).unwrap();
    assert!(protein.is_unknown());
    assert_eq!(protein.len(), 6);
    assert_eq!(protein.to_string(), "XXXXXX");
    assert_eq!(protein.alphabet(), Alphabet::EXTENDED_PROTEIN);

    let stopped = s.translate(&TranslateOptions::new().to_stop(true)).unwrap();
    assert_eq!(stopped.len(), 6);

    assert!(matches!(
        Seq::unknown(21, Alphabet::AMBIGUOUS_DNA).translate(&TranslateOptions::new().cds(true)),
        Err(BioError::InvalidCds { .. })
    ));
}

#[test]
fn unknown_sequence_transforms_stay_unknown() {
    let s = Seq::unknown(9, Alphabet::AMBIGUOUS_DNA);

    let comp = s.reverse_complement().unwrap();
    assert!(comp.is_unknown());
    assert_eq!(comp, "NNNNNNNNN");

    let rna = s.transcribe().unwrap();
    assert!(rna.is_unknown());
    assert_eq!(rna.alphabet(), Alphabet::AMBIGUOUS_RNA);
    assert!(rna.back_transcribe().unwrap().is_unknown());

    let lowered = s.lower();
    assert!(lowered.is_unknown());
    assert_eq!(lowered.to_string(), "nnnnnnnnn");

    assert!(Seq::unknown(3, Alphabet::PROTEIN).complement().is_err());
}

#[cfg(target_pointer_width = "64")]
#[test]
fn huge_unknown_sequence_is_never_materialized() {
    let len = 1usize << 44;
    let s = Seq::unknown(len, Alphabet::AMBIGUOUS_DNA);

    let comp = s.complement().unwrap();
    assert!(comp.is_unknown());
    assert_eq!(comp.len(), len);
    assert!(s.reverse_complement().unwrap().is_unknown());

    assert_eq!(s.find("NNN", None, None).unwrap(), Some(0));
    assert_eq!(s.rfind("NNN", None, None).unwrap(), Some(len - 3));
    assert_eq!(s.find("NA", None, None).unwrap(), None);
    assert_eq!(s.slice(None, None, Some(-2)).unwrap().len(), len / 2);
}

#[test]
fn unknown_sequence_search_windows() {
    let s = Seq::unknown(10, Alphabet::AMBIGUOUS_DNA);
    assert_eq!(s.find("NN", Some(4), None).unwrap(), Some(4));
    assert_eq!(s.rfind("NN", None, Some(-3)).unwrap(), Some(5));
    assert_eq!(s.find("NNN", Some(8), None).unwrap(), None);
    assert_eq!(s.find("", Some(-2), None).unwrap(), Some(8));
    assert_eq!(s.rfind("", None, None).unwrap(), Some(10));
}

#[test]
fn untyped_unknown_complement_reads_the_symbol() {
    let rna_like = Seq::unknown_with(4, Alphabet::NUCLEOTIDE, b'U');
    assert_eq!(rna_like.complement().unwrap(), "AAAA");
    let dna_like = Seq::unknown_with(4, Alphabet::GENERIC, b'T');
    assert_eq!(dna_like.complement().unwrap(), "AAAA");
    assert!(Seq::unknown_with(4, Alphabet::GENERIC, b'A')
        .reverse_complement()
        .unwrap()
        .is_unknown());
}

#[test]
fn unknown_sequence_concatenation() {
    let a = Seq::unknown(4, Alphabet::AMBIGUOUS_DNA);
    let b = Seq::unknown(6, Alphabet::AMBIGUOUS_DNA);
    let joined = a.concat(&b).unwrap();
    assert!(joined.is_unknown());
    assert_eq!(joined.len(), 10);

    let mixed = a.concat(&Seq::new("ACGT", Alphabet::AMBIGUOUS_DNA)).unwrap();
    assert!(!mixed.is_unknown());
    assert_eq!(mixed, "NNNNACGT");
}

#[test]
fn unknown_equals_materialized() {
    let unknown = Seq::unknown(3, Alphabet::AMBIGUOUS_DNA);
    let text = Seq::generic("NNN");
    assert_eq!(unknown, text);
    let set: HashSet<Seq> = [unknown, text].into_iter().collect();
    assert_eq!(set.len(), 1);

    let long_unknown = Seq::unknown(1000, Alphabet::AMBIGUOUS_DNA);
    let long_text = Seq::generic("N".repeat(1000));
    let set: HashSet<Seq> = [long_unknown, long_text].into_iter().collect();
    assert_eq!(set.len(), 1);
}

// ─── mutable sequences ──────────────────────────────────────

#[test]
fn mutable_item_assignment() {
    let mut m = dna("GCCATT").to_mutable();
    m.set(5, b'C').unwrap();
    assert_eq!(m, "GCCATC");
    m.set(-1, b'G').unwrap();
    assert_eq!(m, "GCCATG");
    assert!(m.set(6, b'A').is_err());
}

#[test]
fn mutable_slice_assignment() {
    let mut m = MutableSeq::generic("ACGT");
    m.set_slice(Some(1), Some(3), None, b"TTTT").unwrap();
    assert_eq!(m, "ATTTTT");

    let mut m = MutableSeq::generic("AAAAAA");
    m.set_slice(None, None, Some(2), b"CCC").unwrap();
    assert_eq!(m, "CACACA");
    assert_eq!(
        m.set_slice(None, None, Some(2), b"CC"),
        Err(BioError::SliceLengthMismatch {
            expected: 3,
            got: 2
        })
    );
    assert_eq!(m, "CACACA");
}

#[test]
fn mutable_deletion() {
    let mut m = MutableSeq::generic("ACGTAC");
    m.delete_slice(None, None, Some(2)).unwrap();
    assert_eq!(m, "CTC");
    m.delete(0).unwrap();
    assert_eq!(m, "TC");
    m.delete_slice(Some(0), Some(1), None).unwrap();
    assert_eq!(m, "C");
    assert!(m.delete(3).is_err());
}

#[test]
fn mutable_remove_first_occurrence() {
    let mut m = MutableSeq::generic("GCCATTA");
    m.remove(b'T').unwrap();
    assert_eq!(m, "GCCATA");
    assert_eq!(m.remove(b'U'), Err(BioError::NotFound { ch: 'U' }));
    assert_eq!(m.index_of(b'A').unwrap(), 3);
}

#[test]
fn mutable_push_pop_insert() {
    let mut m = MutableSeq::generic("AC");
    m.push(b'G');
    m.insert(0, b'T');
    m.insert(100, b'A');
    m.insert(-1, b'C');
    assert_eq!(m, "TACGCA");
    assert_eq!(m.pop(None).unwrap(), b'A');
    assert_eq!(m.pop(Some(0)).unwrap(), b'T');
    assert_eq!(m, "ACGC");

    let mut empty = MutableSeq::generic("");
    assert!(matches!(
        empty.pop(None),
        Err(BioError::IndexOutOfRange { .. })
    ));
}

#[test]
fn mutable_in_place_transforms() {
    let mut m = dna("AACG").to_mutable();
    m.reverse_complement().unwrap();
    assert_eq!(m, "CGTT");
    m.complement().unwrap();
    assert_eq!(m, "GCAA");
    m.reverse();
    assert_eq!(m, "AACG");

    let mut protein = MutableSeq::new("MKV", Alphabet::PROTEIN);
    assert!(protein.complement().is_err());
    assert_eq!(protein, "MKV");
}

#[test]
fn mutable_extend_checks_alphabets() {
    let mut m = dna("ATG").to_mutable();
    m.extend_from(&Seq::new("NNN", Alphabet::AMBIGUOUS_DNA)).unwrap();
    assert_eq!(m, "ATGNNN");
    assert_eq!(m.alphabet(), Alphabet::AMBIGUOUS_DNA);

    let err = m.extend_from(&Seq::new("MK", Alphabet::PROTEIN));
    assert!(matches!(err, Err(BioError::AlphabetMismatch { .. })));
    assert_eq!(m, "ATGNNN");

    m.extend_from_slice(b"AC");
    assert_eq!(m.len(), 8);
}

#[test]
fn conversions_copy() {
    let original = dna("ACGT");
    let mut m = original.to_mutable();
    m.set(0, b'T').unwrap();
    assert_eq!(original, "ACGT");

    let frozen = m.to_seq();
    m.set(1, b'T').unwrap();
    assert_eq!(frozen, "TCGT");
    assert_eq!(frozen.alphabet(), Alphabet::UNAMBIGUOUS_DNA);

    let back: Seq = m.clone().into();
    assert_eq!(back, "TTGT");
    let again: MutableSeq = back.into();
    assert_eq!(again, m);

    let unknown: MutableSeq = Seq::unknown(3, Alphabet::PROTEIN).into();
    assert_eq!(unknown, "XXX");
}

#[test]
fn mutable_reads_like_seq() {
    let m = MutableSeq::generic("GATCGATG");
    assert_eq!(m.find("AT", None, None).unwrap(), Some(1));
    assert_eq!(m.count("G").unwrap(), 3);
    assert_eq!(m.slice(None, None, Some(-1)).unwrap(), "GTAGCTAG");
    assert_eq!(m, Seq::generic("GATCGATG"));
    assert!(Seq::generic("AGATCGATGA").contains(&m).unwrap());
}

// ─── laws ───────────────────────────────────────────────────

fn iupac_dna() -> impl Strategy<Value = String> {
    "[ACGTRYKMSWBDHVN]{0,60}"
}

fn plain_dna() -> impl Strategy<Value = String> {
    "[ACGTacgt]{0,60}"
}

proptest! {
    #[test]
    fn reverse_complement_is_an_involution(s in iupac_dna()) {
        let seq = Seq::new(s.as_str(), Alphabet::AMBIGUOUS_DNA);
        let twice = seq.reverse_complement().unwrap().reverse_complement().unwrap();
        prop_assert_eq!(twice, seq);
    }

    #[test]
    fn transcription_round_trips(s in plain_dna()) {
        let seq = Seq::new(s.as_str(), Alphabet::DNA);
        let back = seq.transcribe().unwrap().back_transcribe().unwrap();
        prop_assert_eq!(back.alphabet(), Alphabet::DNA);
        prop_assert_eq!(back, seq);
    }

    #[test]
    fn concatenation_preserves_length_and_text(a in plain_dna(), b in iupac_dna()) {
        let left = Seq::new(a.as_str(), Alphabet::DNA);
        let right = Seq::new(b.as_str(), Alphabet::AMBIGUOUS_DNA);
        let joined = left.concat(&right).unwrap();
        prop_assert_eq!(joined.len(), a.len() + b.len());
        prop_assert_eq!(joined.to_string(), format!("{a}{b}"));
    }

    #[test]
    fn reversed_slice_matches_reverse(s in iupac_dna()) {
        let seq = Seq::generic(s.as_str());
        prop_assert_eq!(seq.slice(None, None, Some(-1)).unwrap(), seq.reverse());
    }

    #[test]
    fn translation_length_is_a_third(s in "[ACGT]{0,90}") {
        let protein = Seq::new(s.as_str(), Alphabet::UNAMBIGUOUS_DNA)
            .translate(&TranslateOptions::default())
            .unwrap();
        prop_assert_eq!(protein.len(), s.len() / 3);
    }

    #[test]
    fn unknown_translation_length(len in 0usize..500) {
        let protein = Seq::unknown(len, Alphabet::AMBIGUOUS_DNA)
            .translate(&TranslateOptions::new().to_stop(true))
            .unwrap();
        prop_assert_eq!(protein.len(), len / 3);
    }
}
