use std::env;
use std::fs;
use std::path::PathBuf;

const PROTOS: &[&str] = &[
    "szconfig.proto",
    "szconfigmanager.proto",
    "szdiagnostic.proto",
    "szengine.proto",
    "szproduct.proto",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Generating Senzing message types...");

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let out_dir = manifest_dir.join("src/generated");
    let proto_folder = manifest_dir.join("proto");

    if !out_dir.exists() {
        fs::create_dir_all(&out_dir)?;
    }

    let proto_files: Vec<PathBuf> = PROTOS.iter().map(|p| proto_folder.join(p)).collect();

    // Paths are resolved by the hand-written wrappers, only messages are generated.
    tonic_prost_build::configure()
        .build_server(false)
        .build_client(false)
        .out_dir(&out_dir)
        .compile_protos(&proto_files, &[proto_folder])?;

    println!("Done! Generated files are in src/generated");

    Ok(())
}
