use guidescan::{GuideDesigner, Parameters, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let params = Parameters::default()
        .with_gc_window(30, 70)
        .with_hairpin_threshold(6)
        .with_max_run_length(4)
        .with_upstream_tolerance(5)?;

    // chr1 carries the target gene; chr2 shares one seed region with it.
    let mut designer = GuideDesigner::new(params);
    designer.scan_genome([
        ("chr1", "TTGACTGACTGACTGACTGACTCGGTTTTGCAGCATTGACCATGCATGATGG"),
        ("chr2", "ACGATCGATCGGATCGATTACGATCGATTTAGCAGCATTGACCATGCATGATGG"),
    ]);
    designer.scan_target([("gene", "CTGACTGACTGACTGACTGACTCGGA")]);

    println!(
        "genome: {} PAM sites, {} accepted",
        designer.genome_stats().pam_sites,
        designer.genome_stats().accepted
    );

    for rec in designer.finish().records() {
        println!("{} {} {}:{}", rec.target_site(), rec.location.strand, rec.location.source_id, rec.location.start_offset);
        println!("  order: {}", rec.ordering_oligo());
    }
    Ok(())
}
