use nvec::{vector, Vector};
use rand::Rng;

fn main() {
    let a = vector![1.0, 2.0];
    let b = vector![3.0, 4.0];
    let c = vector![5.0, 6.0];

    // (a + b) · c
    println!("({} + {}) . {} = {}", a, b, c, a.add(&b).dot(&c));

    // force on a charge moving through a magnetic field: F = q (v x B)
    let mut rng = rand::thread_rng();
    let velocity: Vector = (0..3).map(|_| rng.r#gen::<f64>()).collect();
    let field = vector![0.0, 0.0, 1.5];
    let force = velocity.cross(&field).mul_scalar(-1.0);
    println!("v = {}, B = {}, F = {}, |F| = {}", velocity, field, force, force.norm());

    // recoverable alternative to the panicking methods
    match a.try_cross(&b) {
        Ok(v) => println!("a x b = {}", v),
        Err(e) => println!("a x b: {}", e),
    }
}
