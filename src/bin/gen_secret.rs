/**
 * Secret Generator
 *
 * Prints a fresh 256-bit hex secret for JWT signing. Run once per
 * deployment and place the output in JWT_SECRET; the server refuses to
 * start without one.
 */

use rand::RngCore;

fn main() {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    let secret = hex::encode(bytes);

    println!("Generated secret key:");
    println!("{}", "-".repeat(64));
    println!("{secret}");
    println!("{}", "-".repeat(64));
    println!("Set this as JWT_SECRET in your environment or .env file");
}
