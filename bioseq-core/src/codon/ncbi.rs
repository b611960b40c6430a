//! NCBI genetic code reference data.
//!
//! Residue strings follow NCBI codon order: first base varies slowest, bases
//! in the order T, C, A, G.

pub(crate) struct GeneticCode {
    pub id: u8,
    pub names: &'static [&'static str],
    pub residues: &'static [u8; 64],
    pub starts: &'static [&'static str],
}

pub(crate) const GENETIC_CODES: &[GeneticCode] = &[
    GeneticCode {
        id: 1,
        names: &["Standard", "SGC0"],
        residues: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["TTG", "CTG", "ATG"],
    },
    GeneticCode {
        id: 2,
        names: &["Vertebrate Mitochondrial", "SGC1"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSS**VVVVAAAADDEEGGGG",
        starts: &["ATT", "ATC", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 3,
        names: &["Yeast Mitochondrial", "SGC2"],
        residues: b"FFLLSSSSYY**CCWWTTTTPPPPHHQQRRRRIIMMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 4,
        names: &[
            "Mold Mitochondrial",
            "Protozoan Mitochondrial",
            "Coelenterate Mitochondrial",
            "Mycoplasma",
            "Spiroplasma",
            "SGC3",
        ],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["TTA", "TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 5,
        names: &["Invertebrate Mitochondrial", "SGC4"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSSSVVVVAAAADDEEGGGG",
        starts: &["TTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 6,
        names: &[
            "Ciliate Nuclear",
            "Dasycladacean Nuclear",
            "Hexamita Nuclear",
            "SGC5",
        ],
        residues: b"FFLLSSSSYYQQCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 9,
        names: &["Echinoderm Mitochondrial", "Flatworm Mitochondrial", "SGC8"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["ATG", "GTG"],
    },
    GeneticCode {
        id: 10,
        names: &["Euplotid Nuclear", "SGC9"],
        residues: b"FFLLSSSSYY**CCCWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 11,
        names: &["Bacterial", "Archaeal", "Plant Plastid"],
        residues: b"FFLLSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 12,
        names: &["Alternative Yeast Nuclear"],
        residues: b"FFLLSSSSYY**CC*WLLLSPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["CTG", "ATG"],
    },
    GeneticCode {
        id: 13,
        names: &["Ascidian Mitochondrial"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNKKSSGGVVVVAAAADDEEGGGG",
        starts: &["TTG", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 14,
        names: &["Alternative Flatworm Mitochondrial"],
        residues: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 15,
        names: &["Blepharisma Macronuclear"],
        residues: b"FFLLSSSSYY*QCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 16,
        names: &["Chlorophycean Mitochondrial"],
        residues: b"FFLLSSSSYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 21,
        names: &["Trematode Mitochondrial"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIMMTTTTNNNKSSSSVVVVAAAADDEEGGGG",
        starts: &["ATG", "GTG"],
    },
    GeneticCode {
        id: 22,
        names: &["Scenedesmus obliquus Mitochondrial"],
        residues: b"FFLLSS*SYY*LCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 23,
        names: &["Thraustochytrium Mitochondrial"],
        residues: b"FF*LSSSSYY**CC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATT", "ATG", "GTG"],
    },
    GeneticCode {
        id: 24,
        names: &["Pterobranchia Mitochondrial", "Rhabdopleuridae Mitochondrial"],
        residues: b"FFLLSSSSYY**CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: &["TTG", "CTG", "ATG", "GTG"],
    },
    GeneticCode {
        id: 25,
        names: &["Candidate Division SR1", "Gracilibacteria"],
        residues: b"FFLLSSSSYY**CCGWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["TTG", "ATG", "GTG"],
    },
    GeneticCode {
        id: 26,
        names: &["Pachysolen tannophilus Nuclear"],
        residues: b"FFLLSSSSYY**CC*WLLLAPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["CTG", "ATG"],
    },
    GeneticCode {
        id: 29,
        names: &["Mesodinium Nuclear"],
        residues: b"FFLLSSSSYYYYCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 30,
        names: &["Peritrich Nuclear"],
        residues: b"FFLLSSSSYYEECC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["ATG"],
    },
    GeneticCode {
        id: 32,
        names: &["Balanophoraceae Plastid"],
        residues: b"FFLLSSSSYY*WCC*WLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSRRVVVVAAAADDEEGGGG",
        starts: &["TTG", "CTG", "ATT", "ATC", "ATA", "ATG", "GTG"],
    },
    GeneticCode {
        id: 33,
        names: &["Cephalodiscidae Mitochondrial"],
        residues: b"FFLLSSSSYYY*CCWWLLLLPPPPHHQQRRRRIIIMTTTTNNKKSSSKVVVVAAAADDEEGGGG",
        starts: &["TTG", "CTG", "ATG", "GTG"],
    },
];
