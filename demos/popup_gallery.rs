//! Builds a small map of Florianópolis with one marker per popup kind and
//! prints the scene JSON a Leaflet page could load.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example popup_gallery -- path/to/photo.jpg
//! ```

use leafmark::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let map = create_map(
        LatLng::new(-27.5954, -48.548),
        13,
        Some("OpenStreetMap"),
        Some("© OpenStreetMap contributors"),
    )?;

    let popups = PopupBuilder::new(PopupProfile::Safe);
    let mut scene = SceneRecorder::new();
    scene.load_map(&map)?;

    let reitoria = create_marker(
        LatLng::new(-27.5969, -48.5495),
        create_icon(SymbolSet::FontAwesome, "building", "white", "darkblue", 0),
        Some(popups.build_text_link(
            "Reitoria IFSC",
            "Rua 14 de Julho, 150 - Coqueiros",
            "https://www.ifsc.edu.br",
            None,
        )),
        Some("Reitoria".to_string()),
    )?;
    scene.place_marker(reitoria)?;

    let ponte = create_marker(
        LatLng::new(-27.5935, -48.5665),
        create_icon(SymbolSet::Glyphicon, "star", "yellow", "cadetblue", 0),
        Some(
            popups
                .build_remote_image(
                    "Ponte Hercílio Luz",
                    "Inaugurada em 1926",
                    "https://upload.wikimedia.org/wikipedia/commons/thumb/ponte.jpg",
                    "https://pt.wikipedia.org/wiki/Ponte_Herc%C3%ADlio_Luz",
                    "Wikipedia",
                    Some(240),
                    None,
                )
                .with_max_width(300),
        ),
        None,
    )?;
    scene.place_marker(ponte)?;

    // Embedded photo only when a path is given on the command line
    if let Some(path) = std::env::args().nth(1) {
        let popup = popups.build_embedded_image(
            "Foto local",
            "Imagem embutida no popup",
            &path,
            "https://www.ifsc.edu.br",
            "Mais",
            None,
            None,
        )?;
        let marker = create_marker(
            LatLng::new(-27.6003, -48.5190),
            create_icon(SymbolSet::FontAwesome, "camera", "white", "red", 0),
            Some(popup),
            Some(path),
        )?;
        scene.place_marker(marker)?;
    }

    println!("{}", scene.to_json_string()?);
    Ok(())
}
