use cosiest_lattice::NoiseEngine;

#[doc(hidden)]
fn main() {
    env_logger::init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    let mut engine = NoiseEngine::new();
    engine.reseed(Some(seed));
    for octaves in [1, 4, 8] {
        engine.configure(Some(octaves), None);
        let mut row = [0.; 100];
        engine.fill_1d(0., 0.1, &mut row);
        println!("octaves {octaves}:");
        for (i, y) in row.into_iter().enumerate() {
            println!("{:.1}: {}", i as f64 * 0.1, y);
        }
    }
}
