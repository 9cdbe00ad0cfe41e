use std::fs;
use std::path::Path;

use tof_png::{convert, ConvertConfig, RangeBounds};

/// Write a synthetic depth/amplitude pair: a tilted wall with a ball in front
/// of it, and a weak-signal corner that should come out black.
fn write_frames(dir: &Path, config: &ConvertConfig) {
    let (h, w) = config.shape.dim();
    let mut depth = Vec::with_capacity(h * w);
    let mut amp = Vec::with_capacity(h * w);
    for y in 0..h {
        for x in 0..w {
            let dx = x as f32 - w as f32 / 2.0;
            let dy = y as f32 - h as f32 / 2.0;
            let r = (dx * dx + dy * dy).sqrt();
            let wall = 1500.0 + 6.0 * x as f32;
            depth.push(if r < 50.0 { 800.0 + r * 4.0 } else { wall });
            amp.push(if x < 30 && y < 30 { 5.0 } else { 200.0 - r });
        }
    }
    let to_bytes = |v: &[f32]| v.iter().flat_map(|f| f.to_le_bytes()).collect::<Vec<u8>>();
    fs::write(dir.join("synthetic.depth"), to_bytes(&depth)).unwrap();
    fs::write(dir.join("synthetic.amp"), to_bytes(&amp)).unwrap();
}

pub fn main() {
    let dir = Path::new("target/demo");
    fs::create_dir_all(dir).unwrap();
    let config = ConvertConfig::default();
    write_frames(dir, &config);

    let bounds = RangeBounds::new(700.0, 2500.0).unwrap();
    let outputs = convert(
        &dir.join("synthetic.amp"),
        &dir.join("synthetic.depth"),
        bounds,
        &config,
    )
    .unwrap();
    println!("{}", outputs.depth.display());
    println!("{}", outputs.amplitude.display());
}
