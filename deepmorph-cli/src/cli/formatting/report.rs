use super::output::{
    create_standard_table, header_cell, percent_cell, section_header, status_cell, tree,
};
use anyhow::Result;
use colored::*;
use comfy_table::Cell;
use deepmorph_bio::formats::fasta::FastaRecord;
use deepmorph_bio::sequence::MotifHit;
use deepmorph_bio::{AnalysisResult, ReferenceCatalog, SequenceMetrics};
use serde_json::{json, Value};

fn metadata(record: &FastaRecord) -> Value {
    json!({
        "generated": chrono::Utc::now().to_rfc3339(),
        "version": deepmorph_core::VERSION,
        "record": {
            "id": record.id,
            "description": record.description,
        },
    })
}

pub fn analysis_json(
    record: &FastaRecord,
    metrics: &SequenceMetrics,
    result: &AnalysisResult,
) -> Result<Value> {
    Ok(json!({
        "metadata": metadata(record),
        "metrics": serde_json::to_value(metrics)?,
        "result": serde_json::to_value(result)?,
    }))
}

pub fn metrics_json(
    record: &FastaRecord,
    metrics: &SequenceMetrics,
    motifs: &[MotifHit],
) -> Result<Value> {
    Ok(json!({
        "metadata": metadata(record),
        "metrics": serde_json::to_value(metrics)?,
        "motifs": serde_json::to_value(motifs)?,
    }))
}

/// A single report stays an object; several become an array
pub fn render_json(mut reports: Vec<Value>, pretty: bool) -> Result<String> {
    let value = if reports.len() == 1 {
        reports.remove(0)
    } else {
        Value::Array(reports)
    };
    let rendered = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(rendered)
}

fn record_title(prefix: &str, record: &FastaRecord) -> String {
    match &record.description {
        Some(desc) => format!("{}: {} ({})", prefix, record.id, desc),
        None => format!("{}: {}", prefix, record.id),
    }
}

fn metric_items(metrics: &SequenceMetrics) -> Vec<(&'static str, String)> {
    vec![
        ("Length", format!("{} bp", metrics.length)),
        ("GC content", format!("{}%", metrics.gc_content)),
        ("Conserved motifs", metrics.conserved_motif_count.to_string()),
    ]
}

pub fn print_analysis(record: &FastaRecord, metrics: &SequenceMetrics, result: &AnalysisResult) {
    section_header(&record_title("Analysis", record));

    let mut summary = vec![
        ("Total clusters", result.total_clusters.to_string()),
        ("Known species", result.known_species.to_string().green().to_string()),
        (
            "Novel candidates",
            result.novel_candidates.to_string().magenta().to_string(),
        ),
        ("Processing time", format!("{}s", result.processing_time)),
    ];
    summary.extend(metric_items(metrics));
    tree(&summary);

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Cluster"),
        header_cell("Organism"),
        header_cell("Status"),
        header_cell("Confidence"),
        header_cell("Abundance"),
        header_cell("GC"),
        header_cell("Motifs"),
        header_cell("Ecological role"),
    ]);

    for cluster in &result.species {
        table.add_row(vec![
            Cell::new(&cluster.cluster_name),
            Cell::new(format!(
                "{}\n{}",
                cluster.profile.scientific_name, cluster.profile.common_name
            )),
            status_cell(cluster.status),
            percent_cell(cluster.confidence, 90),
            Cell::new(format!("{}%", cluster.abundance)),
            Cell::new(format!("{}%", cluster.sequence_info.gc_content)),
            Cell::new(cluster.sequence_info.conserved_motif_count),
            Cell::new(&cluster.profile.ecological_role),
        ]);
    }
    println!("{}", table);

    let total = result.abundance_total();
    if total != 100 {
        println!(
            "{}",
            format!("Abundances are rounded independently and sum to {}%", total).dimmed()
        );
    }
}

pub fn print_metrics(record: &FastaRecord, metrics: &SequenceMetrics, motifs: &[MotifHit]) {
    section_header(&record_title("Metrics", record));
    tree(&metric_items(metrics));

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Motif"),
        header_cell("Pattern"),
        header_cell("Matches"),
    ]);
    for hit in motifs {
        table.add_row(vec![
            Cell::new(&hit.name),
            Cell::new(&hit.pattern),
            Cell::new(hit.count),
        ]);
    }
    println!("{}", table);
}

pub fn print_catalog(catalog: &ReferenceCatalog, source: &str) {
    section_header("Reference catalog");
    tree(&[
        ("Source", source.to_string()),
        ("Known profiles", catalog.known().len().to_string()),
        ("Novel candidates", catalog.novel().len().to_string()),
    ]);

    let mut table = create_standard_table();
    table.set_header(vec![
        header_cell("Status"),
        header_cell("Scientific name"),
        header_cell("Common name"),
        header_cell("Group"),
        header_cell("Bioactive compounds"),
    ]);

    let rows = catalog
        .known()
        .iter()
        .map(|p| (deepmorph_bio::ClusterStatus::Known, p))
        .chain(
            catalog
                .novel()
                .iter()
                .map(|p| (deepmorph_bio::ClusterStatus::Novel, p)),
        );
    for (status, profile) in rows {
        table.add_row(vec![
            status_cell(status),
            Cell::new(&profile.scientific_name),
            Cell::new(&profile.common_name),
            Cell::new(&profile.phylogenetic_group),
            Cell::new(profile.biosynthetic_potential.compounds.join(", ")),
        ]);
    }
    println!("{}", table);
}
