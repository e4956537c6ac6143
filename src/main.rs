use macroquad::prelude::Conf;
use snake::game::GameConfig;
use snake::modes::HumanMode;

fn window_conf() -> Conf {
    let config = GameConfig::default();

    Conf {
        window_title: "Snake".to_owned(),
        window_width: config.screen_width,
        window_height: config.screen_height,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let mut human_mode = HumanMode::new(GameConfig::default());
    human_mode.run().await;
}
