use swatch::{Color, Options};

pub fn main() {
    let chocolate: Color = "#D2691E".parse().expect("valid hex color");

    // rgb(210, 105, 30)
    println!("{}", chocolate.to_rgb());

    // hsl(24.999999999999996, 74.99999999999999%, 47.05882352941176%)
    println!("{}", chocolate.to_hsl());

    // hsl(25, 75%, 47%)
    println!("{}", chocolate.to_hsl_with(Options::ROUND_HSL));

    // #E4843F
    println!("{}", chocolate.lighten(10.0).to_hex());

    // rgba(121, 60, 17, 0.5)
    let shadow = chocolate.alpha(0.5).lighten_with(-20.0, Options::PRESERVE_ALPHA);
    println!("{shadow}");

    match Color::parse("rgba(10,20,30,0.5)") {
        Ok(color) => println!("{color}"),
        Err(err) => println!("{err}"),
    }
}
