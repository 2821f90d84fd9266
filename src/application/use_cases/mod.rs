/// Use cases module containing application business logic orchestration
mod export_bom;

pub use export_bom::BomExporter;
