use polyeval::parse_polynomial;

fn main() {
    let dividend = parse_polynomial("2x^4 + 3x^3 - x + 5").expect("parse dividend");
    let divisor = parse_polynomial("x^2 + 1").expect("parse divisor");

    match dividend.div_rem(&divisor) {
        Ok(result) => println!("({dividend}) / ({divisor})\n{result}"),
        Err(err) => eprintln!("division error: {err}"),
    }
}
