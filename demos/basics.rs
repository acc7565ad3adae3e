//! Walks through construction, element access, arithmetic, and rendering
//! for both container types.

use matriz::prelude::*;

fn main() -> Result<()> {
    let mut m = Matrix::<f32>::zeros(2, 3)?;
    m.set(1, 2, 1.12345)?;
    m.set(2, 3, 12.2468)?;
    println!("{m}");

    let mut v = Vector::from_slice(&[-1, 2, 3])?;
    v.set(1, 1)?;
    let x = v.get(1)?;
    println!("First element = {x}");
    println!("{v}");

    let a = v.clone();
    println!("{a}");

    let mut b = a.clone();
    b.add_assign(&a)?;
    let c = v.add(&a)?.add(&b)?;
    println!("{c}");

    Ok(())
}
