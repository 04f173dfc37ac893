use std::fs::write;
use png::Encoder;
use png::ColorType::Rgba;
use png::BitDepth::Eight;
use rgb::{FromSlice, RGBA8};
use sectors::*;
use sectors::color::{hsv_color, mix_colors};
use sectors::flatten::{fill_mask, DEFAULT_TOLERANCE};

fn blend(dst: &mut [RGBA8], mask: &[u8], color: RGBA8) {
    for (pixel, &coverage) in dst.iter_mut().zip(mask) {
        if coverage != 0 {
            let src = coverage as u32;
            let inv = 255 - src;
            let mix = |s: u8, d: u8| ((s as u32 * src + d as u32 * inv) / 255) as u8;
            *pixel = RGBA8::new(
                mix(color.r, pixel.r),
                mix(color.g, pixel.g),
                mix(color.b, pixel.b),
                mix(color.a, pixel.a),
            );
        }
    }
}

fn main() {
    let (w, h) = (300usize, 300usize);
    let mut canvas = vec![0u8; w * h * 4];
    let mut mask = vec![0u8; w * h];

    let slices: [(f32, f32); 4] = [
        (0.0, 110.0),
        (110.0, 70.0),
        (180.0, 100.0),
        (280.0, 80.0),
    ];

    for (i, &(start, sweep)) in slices.iter().enumerate() {
        let mut path = Path::new();
        if i == 1 {
            // pull this slice out of the pie, along its bisector
            let mut sink = TranslatedSink::radial(&mut path, 12.0, start + sweep / 2.0);
            add_circle_sector(&mut sink, 150.0, 150.0, 95.0, start, sweep, 4.0);
        } else {
            add_circle_sector(&mut path, 150.0, 150.0, 95.0, start, sweep, 4.0);
        }

        let mut flat = FlatteningSink::new(DEFAULT_TOLERANCE);
        flat.append_path(&path);
        mask.fill(0);
        fill_mask(flat.points(), &mut mask, w, h);

        let color = hsv_color(20.0 + i as f32 * 85.0, 0.75, 0.9);
        blend(canvas.as_rgba_mut(), &mask, color);
    }

    // outer gauge ring
    let mut path = Path::new();
    add_ring_sector(&mut path, 150.0, 150.0, 130.0, 200.0, 140.0, 14.0, 3.0);
    let mut flat = FlatteningSink::new(DEFAULT_TOLERANCE);
    flat.append_path(&path);
    mask.fill(0);
    fill_mask(flat.points(), &mut mask, w, h);
    let gauge = mix_colors(hsv_color(210.0, 0.8, 0.85), hsv_color(280.0, 0.8, 0.85), 0.5);
    blend(canvas.as_rgba_mut(), &mask, gauge);

    let mut png_buf = Vec::new();
    {
        let mut encoder = Encoder::new(&mut png_buf, w as u32, h as u32);
        encoder.set_color(Rgba);
        encoder.set_depth(Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&canvas).unwrap();
    }
    write("pie_chart.png", &png_buf).unwrap();
}
