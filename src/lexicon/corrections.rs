//! Built-in correction table for terms the transcription engine mishears.
//!
//! The lectures mix Mandarin narration with English systems vocabulary
//! (CSE/CSP course material), and the STT engine reliably garbles the
//! English jargon.  Each entry maps one observed mis-transcription to its
//! intended term.  Entries are applied as literal find-and-replace in
//! declaration order; a later entry is allowed to re-match text produced by
//! an earlier one — the table is curated so that never corrupts output, but
//! the order itself is load-bearing and pinned by tests.

/// `(misheard, corrected)` pairs, applied top to bottom.
pub static CORRECTIONS: &[(&str, &str)] = &[
    ("CSECSE", "CSE"),
    ("emo", "MIT"),
    ("MT", "MIT"),
    ("GCG", "GCC"),
    ("on deline", "unsigned"),
    ("on line", "unsigned"),
    ("DP sic", "DNS"),
    ("DP 这 c", "DNS"),
    ("slogal", "throughput"),
    ("suput", "throughput"),
    ("fluwput", "throughput"),
    ("fluwook", "throughput"),
    ("lillilenance", "latency"),
    ("latx", "latency"),
    ("titilalization", "utilization"),
    ("comcomtibility", "compatibility"),
    ("comtitiity", "compatibility"),
    ("usubility", "usability"),
    ("usiability", "usability"),
    ("consistcy", "consistency"),
    ("consisency", "consistency"),
    ("fortorrent", "fault tolerance"),
    ("prison priicy", "privacy"),
    ("agr", "API"),
    ("RDA", "RDMA"),
    ("RDV", "RDMA"),
    ("RDB", "RDMA"),
    ("DCQB", "DCQP"),
    ("DCQQ", "DCQP"),
    ("VR sleep", "VMsleep"),
    ("eleicc", "elastic"),
    ("eleicted", "elastic"),
    ("obscility", "mobility"),
    ("migration", "migration"),
    ("NNCC", "NCCL"),
    ("mmedia", "NCCL"),
    ("mltage cass", "multi-cast"),
    ("consistency y", "consistency"),
    ("coninicence", "consistency"),
    ("短信四 g", "consistency"),
];

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
