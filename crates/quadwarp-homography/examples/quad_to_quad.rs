use argh::FromArgs;
use quadwarp_homography::{
    embed_as_mat4, points_from_flat, PerspectiveTransform, Point2d, NUM_CORRESPONDENCES,
};

#[derive(FromArgs)]
/// Map the unit square (or a custom quad) onto a destination quad and print the
/// resulting 4x4 perspective matrix.
struct Args {
    /// destination corners as x0,y0,x1,y1,x2,y2,x3,y3
    #[argh(
        option,
        short = 'd',
        default = "String::from(\"0.1,0.2,0.9,0.1,1.2,1.1,-0.2,0.8\")"
    )]
    dst: String,

    /// source corners as x0,y0,x1,y1,x2,y2,x3,y3 (defaults to the unit square)
    #[argh(option, short = 's')]
    src: Option<String>,
}

fn parse_quad(text: &str) -> Result<Vec<Point2d>, Box<dyn std::error::Error>> {
    let values = text
        .split(',')
        .map(|v| v.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(points_from_flat(&values)?)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let src = match args.src.as_deref() {
        Some(text) => parse_quad(text)?,
        None => points_from_flat(&[0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0])?,
    };
    let dst = parse_quad(&args.dst)?;

    log::info!("mapping {} source points onto {} destination points", src.len(), dst.len());

    let transform = PerspectiveTransform::new(&src, &dst)?;
    let coeffs = transform.coeffs();
    println!("coeffs: {:?}", coeffs.to_array());
    println!("coeffs (inverse): {:?}", transform.coeffs_inv().to_array());

    let m = embed_as_mat4(coeffs);
    let rows = m.to_rows_array();
    println!("matrix4:");
    for row in rows.chunks_exact(4) {
        println!("  [{:>10.5} {:>10.5} {:>10.5} {:>10.5}]", row[0], row[1], row[2], row[3]);
    }

    for i in 0..NUM_CORRESPONDENCES {
        let s = transform.src()[i];
        if let Some(d) = transform.transform(s) {
            println!("({:.3}, {:.3}) -> ({:.3}, {:.3})", s.x, s.y, d.x, d.y);
        }
    }

    Ok(())
}
