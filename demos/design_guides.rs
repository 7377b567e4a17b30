use guidescan::{DesignReport, GuideDesigner, Parameters, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // ---------------------------------------------------- //
    // 1. Design rules
    // ---------------------------------------------------- //
    // GC 40–60 %, hairpins of 5+ pairs rejected, 12 nt seed region,
    // runs of 4+ A's rejected, no extra G after the PAM.
    let params = Parameters::new(40, 60, 5, 11, 4, false)?;

    // ---------------------------------------------------- //
    // 2. A toy two-chromosome genome
    // ---------------------------------------------------- //
    let genome = [
        ("chrI", "GCTAAAGACAATTACATAACATACACGTCAGCACGAAACTTGTTGGCCCAGTGTGAATCGCTTAAGGGTTAAGTAAGTGTGATGCATACGCCTTTACTTGCTGTGTCCACCCCATCGGACTGGCATTTTTATTACACTCAGAAACAGAACTCGGGTAATT"),
        ("chrII", "TTGACAGGTCACGCAGAGGCGCGCCCTCCTGAAGTGCGTGGACACTCGCTATGAATCTCTGATTTACCCACTCTGCCAAACTCCAGCGCGGTCAGTTCCATCACCCTAAGTAACCGAATAATGCGTTCGCTCTATTGACTACGACGCGCTCATTCCCTTG"),
    ];

    // ---------------------------------------------------- //
    // 3. Scan, prune and list every genome-unique guide
    // ---------------------------------------------------- //
    let mut designer = GuideDesigner::new(params);
    designer.scan_genome(genome);
    println!("{}", designer.params());
    println!();

    let report = designer.finish();
    if let DesignReport::AllSites(records) = &report {
        println!("spacer+PAM              | source | strand | start");
        println!("------------------------+--------+--------+------");
        for rec in records {
            println!(
                "{} | {:6} | {:6} | {}",
                rec.target_site(),
                rec.location.source_id,
                rec.location.strand,
                rec.location.start_offset
            );
        }
    }

    Ok(())
}
