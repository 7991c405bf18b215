use grass_clusters::{
    Cluster, ClusterConfig, Config, HeightGrid, build_runs, convert_grid, convert_image, emit,
};
use image::{DynamicImage, ImageBuffer, Rgb};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const GREY: Rgb<u8> = Rgb([128, 128, 128]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn image_from_fn(w: u32, h: u32, f: impl Fn(u32, u32) -> Rgb<u8>) -> DynamicImage {
    DynamicImage::ImageRgb8(ImageBuffer::from_fn(w, h, f))
}

fn verified() -> Config {
    Config { verify: true, ..Default::default() }
}

#[test]
fn uniform_square_becomes_one_cluster() {
    let img = image_from_fn(3, 3, |_, _| BLACK);
    let out = convert_image(&img, &verified()).expect("conversion should succeed");
    assert_eq!(out.row_boxes, 3);
    assert_eq!(out.clusters, vec![Cluster::new(1.0, 0, 0, 3, 3)]);
}

#[test]
fn row_pass_of_uniform_square() {
    let grid = HeightGrid::from_rows(vec![vec![0.4; 3]; 3]).unwrap();
    let runs = build_runs(&grid, &ClusterConfig::default());
    assert_eq!(runs, vec![
        Cluster::new(0.4, 0, 0, 3, 1),
        Cluster::new(0.4, 0, 1, 3, 1),
        Cluster::new(0.4, 0, 2, 3, 1),
    ]);
}

#[test]
fn long_row_splits_at_width_cap() {
    let img = image_from_fn(25, 1, |_, _| BLACK);
    let out = convert_image(&img, &verified()).unwrap();
    assert_eq!(out.clusters, vec![
        Cluster::new(1.0, 0, 0, 20, 1),
        Cluster::new(1.0, 20, 0, 5, 1),
    ]);
}

#[test]
fn checkerboard_stays_unmerged() {
    let img = image_from_fn(2, 2, |x, y| if (x + y) % 2 == 0 { BLACK } else { GREY });
    let out = convert_image(&img, &verified()).unwrap();
    assert_eq!(out.row_boxes, 4);
    assert_eq!(out.clusters.len(), 4);
    assert!(out.clusters.iter().all(|c| c.w == 1 && c.h == 1));
}

#[test]
fn empty_color_merges_like_any_value() {
    let img = image_from_fn(3, 2, |_, _| WHITE);
    let out = convert_image(&img, &verified()).unwrap();
    assert_eq!(out.clusters, vec![Cluster::new(0.0, 0, 0, 3, 2)]);
    assert_eq!(emit::to_text(&out.clusters), "([(0,0,0,3,2)])");
}

#[test]
fn window_boundary_blocks_distant_merge() {
    // Column 0 is solid black; the rest alternates so every row has 101 runs
    // and the black cell of row 1 sits 101 entries after the one of row 0.
    let img = image_from_fn(101, 2, |x, _| match x {
        0 => BLACK,
        x if x % 2 == 0 => GREY,
        _ => WHITE,
    });
    let out = convert_image(&img, &verified()).unwrap();
    assert_eq!(out.row_boxes, 202);
    assert_eq!(out.clusters.len(), 202);
    assert_eq!(out.clusters[0], Cluster::new(1.0, 0, 0, 1, 1));

    let mut wide = verified();
    wide.cluster.max_lookahead = 101;
    let out = convert_image(&img, &wide).unwrap();
    assert_eq!(out.clusters.len(), 101);
    assert_eq!(out.clusters[0], Cluster::new(1.0, 0, 0, 1, 2));
}

#[test]
fn tall_region_is_capped_and_tiled() {
    let img = image_from_fn(30, 45, |_, _| BLACK);
    let out = convert_image(&img, &verified()).unwrap();
    assert_eq!(out.row_boxes, 90);
    assert_eq!(out.clusters, vec![
        Cluster::new(1.0, 0, 0, 20, 20),
        Cluster::new(1.0, 20, 0, 10, 20),
        Cluster::new(1.0, 0, 20, 20, 20),
        Cluster::new(1.0, 20, 20, 10, 20),
        Cluster::new(1.0, 0, 40, 20, 5),
        Cluster::new(1.0, 20, 40, 10, 5),
    ]);
}

#[test]
fn rows_with_different_values_do_not_stack() {
    let grid = HeightGrid::from_rows(vec![vec![0.5; 4], vec![0.7; 4]]).unwrap();
    let out = convert_grid(&grid, &verified()).unwrap();
    assert_eq!(out.clusters, vec![
        Cluster::new(0.5, 0, 0, 4, 1),
        Cluster::new(0.7, 0, 1, 4, 1),
    ]);
}

#[test]
fn invalid_config_aborts() {
    let grid = HeightGrid::from_rows(vec![vec![0.5; 4]]).unwrap();
    let mut cfg = Config::default();
    cfg.cluster.max_lookahead = 0;
    assert!(convert_grid(&grid, &cfg).is_err());
}
