pub mod palette_writer;

pub use palette_writer::PaletteWriter;
