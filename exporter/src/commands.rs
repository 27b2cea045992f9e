//! Subcommand implementations.

use std::fmt;
use std::fs::File;
use std::io::BufReader;

use ksm_core::gltf::load_gltf_polygons;
use ksm_core::ksm::{KsmFile, read_ksm};
use ksm_core::{ExportSummary, export_ksm};

use crate::args::{Cli, Command, ConvertArgs, InspectArgs};
use crate::config::{ExportSection, load_settings, resolve};

pub fn run(cli: &Cli) -> Result<(), String> {
    match &cli.command {
        Command::Convert(args) => convert(args).map(|summary| {
            println!(
                "{} vertices, {} faces, {} bytes",
                summary.vertex_count, summary.face_count, summary.bytes_written
            );
        }),
        Command::Inspect(args) => inspect(args).map(|report| print!("{report}")),
    }
}

pub fn convert(args: &ConvertArgs) -> Result<ExportSummary, String> {
    let file_settings = match &args.config {
        Some(path) => load_settings(path)?.export,
        None => ExportSection::default(),
    };
    let settings = resolve(args, &file_settings);
    log::debug!("conversion settings: {settings:?}");

    let data = std::fs::read(&args.input)
        .map_err(|e| format!("failed to read {}: {e}", args.input.display()))?;
    let polygons = load_gltf_polygons(&data, &settings.source)
        .map_err(|e| format!("{}: {e}", args.input.display()))?;

    let output = args.output_path();
    export_ksm(&output, &polygons, &settings.export)
        .map_err(|e| format!("failed to export {}: {e}", output.display()))
}

pub fn inspect(args: &InspectArgs) -> Result<String, String> {
    let file = File::open(&args.file)
        .map_err(|e| format!("failed to open {}: {e}", args.file.display()))?;
    let ksm = read_ksm(BufReader::new(file))
        .map_err(|e| format!("{}: {e}", args.file.display()))?;
    if let Some(face) = ksm.find_invalid_face() {
        log::warn!("face {face} references a vertex outside the vertex chunk");
    }
    Ok(format_report(&ksm, args.faces))
}

/// Human-readable summary of a decoded file.
pub fn format_report(ksm: &KsmFile, faces: usize) -> String {
    let mut out = String::new();
    if let Err(e) = write_report(&mut out, ksm, faces) {
        log::warn!("report truncated: {e}");
    }
    out
}

fn write_report(out: &mut impl fmt::Write, ksm: &KsmFile, faces: usize) -> fmt::Result {
    writeln!(out, "vertices: {}", ksm.vertices.len())?;
    writeln!(out, "faces:    {}", ksm.faces.len())?;
    writeln!(out, "bytes:    {}", ksm.byte_size())?;
    if let Some((lo, hi)) = ksm.bounds() {
        writeln!(
            out,
            "bounds:   [{}, {}, {}] .. [{}, {}, {}] (x, z, y)",
            lo[0], lo[1], lo[2], hi[0], hi[1], hi[2]
        )?;
    }
    for (i, face) in ksm.faces.iter().take(faces).enumerate() {
        writeln!(out, "face {i}: {} {} {}", face[0], face[1], face[2])?;
    }
    if ksm.faces.len() > faces {
        writeln!(out, "... {} more", ksm.faces.len() - faces)?;
    }
    Ok(())
}
