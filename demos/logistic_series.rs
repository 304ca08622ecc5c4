use cosiest_lattice::math::map_range;

#[doc(hidden)]
fn main() {
    env_logger::init();
    for x in -5..6 {
        let y = 1. / (1. + (-x as f64).exp());
        let bar = map_range(y, 0., 1., 0., 40.) as usize;
        println!("{x:>3}: {y:.4} {}", "#".repeat(bar));
    }
}
