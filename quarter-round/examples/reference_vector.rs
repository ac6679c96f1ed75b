//! Prints the quarter-round of the reference input, one word per line.
use quarter_round::{State, quarter_round};

const INPUT: State = [0x0012dffa, 0xaafb4cd5, 0x18769012, 0xaff22300];

fn main() {
    for word in quarter_round(INPUT) {
        println!("{word:08x}");
    }
}
