//! End-to-end behaviour of scanning, pruning and target matching.

use std::collections::HashMap;

use guidescan::{
    DesignReport, GuideDesigner, Parameters, Result, SpecificityIndex, Strand, intersect_by_key,
    scan_into, scan_sources,
};

/// 21 A's followed by GG with permissive parameters gives exactly one forward
/// guide with PAM AGG at offset 21.
#[test]
fn poly_a_source_yields_single_forward_guide() -> Result<()> {
    let params = Parameters::new(0, 100, 20, 3, 0, true)?;
    let mut index = SpecificityIndex::new(&params);
    scan_into(&mut index, "chr1", "AAAAAAAAAAAAAAAAAAAAAGG", &params);

    let records = index.prune().records();
    assert_eq!(records.len(), 1);
    let guide = &records[0];
    assert_eq!(guide.spacer, "A".repeat(20));
    assert_eq!(guide.location.strand, Strand::Forward);
    assert_eq!(guide.location.pam, "AGG");
    assert_eq!(guide.location.start_offset, 21);
    assert_eq!(guide.location.source_id, "chr1");
    Ok(())
}

/// The same 23 nt site on two chromosomes is not unique: neither copy survives.
#[test]
fn site_repeated_across_chromosomes_is_pruned() -> Result<()> {
    let params = Parameters::default();
    let site = "GACTGACTGACTGACTGACTTGG";
    let chromosomes = HashMap::from([
        ("chrA".to_string(), format!("TTTTT{site}TTTTT")),
        ("chrB".to_string(), format!("ATATATAT{site}ATA")),
    ]);

    let mut index = SpecificityIndex::new(&params);
    let stats = scan_sources(&mut index, &chromosomes, &params);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.non_unique, 1);
    assert!(index.prune().get("GACTGACTGACTGACTGACT").is_none());
    Ok(())
}

/// Two different spacers whose last `upstream_tolerance + 1` bases match are
/// both dropped, while a longer seed tells them apart.
#[test]
fn seed_length_controls_collisions() -> Result<()> {
    let chromosome = format!(
        "{}AGG{}{}TGG{}",
        "CAGTCAGTCAGTCAGTACGT",
        "T".repeat(10),
        "GTCAGTCAGTCAGTCAACGT",
        "T".repeat(5)
    );
    // Prefix one base so the first GG sits past the boundary
    let chromosome = format!("T{chromosome}");

    let loose = Parameters::default().with_upstream_tolerance(3)?;
    let mut index = SpecificityIndex::new(&loose);
    scan_into(&mut index, "chr1", &chromosome, &loose);
    let pruned = index.prune();
    assert!(!pruned.contains("CAGTCAGTCAGTCAGTACGT"));
    assert!(!pruned.contains("GTCAGTCAGTCAGTCAACGT"));

    let tight = Parameters::default().with_upstream_tolerance(4)?;
    let mut index = SpecificityIndex::new(&tight);
    scan_into(&mut index, "chr1", &chromosome, &tight);
    let pruned = index.prune();
    assert!(pruned.contains("CAGTCAGTCAGTCAGTACGT"));
    assert!(pruned.contains("GTCAGTCAGTCAGTCAACGT"));
    Ok(())
}

/// A reverse-strand site is reported as the minus-strand spacer with its NGG.
#[test]
fn reverse_strand_site_is_read_on_minus_strand() -> Result<()> {
    let params = Parameters::default();
    // plus strand: CCT + revcomp(spacer)
    let spacer = "GACTGACTGACTGACTGACT";
    let chromosome = format!("A{}{}A", "CCT", guidescan::reverse_complement(spacer));

    let mut index = SpecificityIndex::new(&params);
    scan_into(&mut index, "chr1", &chromosome, &params);
    let pruned = index.prune();
    let loc = pruned.get(spacer).expect("minus-strand guide");
    assert_eq!(loc.strand, Strand::Reverse);
    assert_eq!(loc.pam, "AGG");
    assert_eq!(loc.start_offset, 1);
    assert_eq!(loc.spacer_span(), 4..24);
    Ok(())
}

/// Matching reports the genome's record for the single shared key.
#[test]
fn shared_key_is_reported_with_genome_location() -> Result<()> {
    let params = Parameters::default();
    let mut genome = SpecificityIndex::new(&params);
    let mut target = SpecificityIndex::new(&params);

    scan_into(&mut genome, "chr7", &format!("{}GACTGACTGACTGACTGACTCGGT", "T".repeat(40)), &params);
    scan_into(&mut target, "gene", "TGACTGACTGACTGACTGACTCGG", &params);

    let hits = intersect_by_key(&genome.prune(), &target.prune());
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].location.source_id, "chr7");
    assert_eq!(hits[0].location.start_offset, 61);
    Ok(())
}

#[test]
fn designer_reports_target_matches() -> Result<()> {
    let params = Parameters::new(30, 70, 6, 5, 4, false)?;
    let mut designer = GuideDesigner::new(params);
    designer.scan_genome([
        ("chr1", "TTGACTGACTGACTGACTGACTCGGTTTTGCAGCATTGACCATGCATGATGG"),
        ("chr2", "ACGATCGATCGGATCGATTACGATCGATTTAGCAGCATTGACCATGCATGATGG"),
    ]);
    designer.scan_target([("gene", "CTGACTGACTGACTGACTGACTCGGA")]);

    match designer.finish() {
        DesignReport::TargetMatches(hits) => {
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].spacer, "GACTGACTGACTGACTGACT");
            assert_eq!(hits[0].location.source_id, "chr1");
            assert!(hits[0].ordering_oligo().starts_with("CCGAGTCAGTCAGTCAGTCAGTC"));
        }
        other => panic!("expected target matches, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_and_short_sources_are_harmless() -> Result<()> {
    let params = Parameters::default();
    let mut index = SpecificityIndex::with_placeholder(&params);
    let stats = scan_sources(&mut index, [("empty", ""), ("short", "GGCC"), ("n", "NNNNNNNNNNNNNNNNNNNNNNGG")], &params);
    assert_eq!(stats.accepted, 0);
    assert_eq!(stats.pam_sites, 1);
    assert!(index.prune().is_empty());
    Ok(())
}
