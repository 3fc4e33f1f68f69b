use tintwork_core::{Color, PixelCloud, PixelScanner, ScanConfig};

const RED: u32 = 0xFFFF_0000;
const GREEN: u32 = 0xFF00_FF00;
const BLUE: u32 = 0xFF00_00FF;

fn total_samples(clouds: &[PixelCloud]) -> usize {
    clouds.iter().map(PixelCloud::len).sum()
}

#[test]
fn red_red_blue_yields_two_clouds() {
    let clouds = PixelScanner::new(0.01).scan(&[RED, RED, BLUE]);
    assert_eq!(clouds.len(), 2);

    let red = clouds
        .iter()
        .find(|c| c.mean() == Some(Color::from_argb(RED)))
        .expect("red cloud");
    let blue = clouds
        .iter()
        .find(|c| c.mean() == Some(Color::from_argb(BLUE)))
        .expect("blue cloud");
    assert_eq!(red.len(), 2);
    assert_eq!(blue.len(), 1);
}

#[test]
fn nearly_transparent_pixels_never_enter_a_cloud() {
    let pixels = [0x01FF_0000, RED, 0x01FF_0000, 0x0000_00FF];
    let clouds = PixelScanner::new(0.01).scan(&pixels);
    assert_eq!(clouds.len(), 1);
    assert_eq!(total_samples(&clouds), 1);
}

#[test]
fn every_visible_pixel_lands_in_exactly_one_cloud() {
    let pixels: Vec<u32> = (0..512u32)
        .map(|i| {
            let r = (i * 37) % 256;
            let g = (i * 91) % 256;
            let b = (i * 13) % 256;
            0xFF00_0000 | (r << 16) | (g << 8) | b
        })
        .collect();

    let clouds = PixelScanner::new(0.1).scan(&pixels);
    assert_eq!(total_samples(&clouds), pixels.len());

    for cloud in &clouds {
        let (min, mean, max) = (cloud.min().unwrap(), cloud.mean().unwrap(), cloud.max().unwrap());
        assert!(min.red() <= mean.red() && mean.red() <= max.red());
        assert!(min.green() <= mean.green() && mean.green() <= max.green());
        assert!(min.blue() <= mean.blue() && mean.blue() <= max.blue());
    }
}

#[test]
fn scan_result_is_reproducible() {
    let pixels = [RED, GREEN, 0xFFF0_1010, BLUE, 0xFF10_F010, RED];
    let scanner = PixelScanner::new(0.15);
    let first: Vec<usize> = scanner.scan(&pixels).iter().map(PixelCloud::len).collect();
    let second: Vec<usize> = scanner.scan(&pixels).iter().map(PixelCloud::len).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![3, 2, 1]);
}

#[test]
fn clouds_sort_by_size() {
    let mut clouds = PixelScanner::new(0.01).scan(&[BLUE, RED, RED, GREEN, RED, GREEN]);
    clouds.sort_by(|a, b| b.cmp_size(a));
    let sizes: Vec<usize> = clouds.iter().map(PixelCloud::len).collect();
    assert_eq!(sizes, vec![3, 2, 1]);
}

#[test]
fn scanner_from_deserialized_config() {
    let config: ScanConfig = serde_json::from_str(r#"{ "epsilon": 0.5 }"#).unwrap();
    let clouds = PixelScanner::from_config(&config).scan(&[0xFF80_8080, 0xFF90_9090, 0xFFA0_A0A0]);
    assert_eq!(clouds.len(), 1);
    assert_eq!(clouds[0].len(), 3);
}
