use app::App;
use cache::impl_fake::FetcherFake;
use cache::impl_http::FetcherHttp;
use cache::impl_memory::CacheStorageMemory;
use cache::interface::Fetcher;
use cache::manager::CacheManager;
use config::Config;
use decision::engine::DecisionEngine;
use decision::matcher::SubstringMatcher;
use device_camera::impl_fake::DeviceCameraFake;
use device_display::impl_console::DeviceDisplayConsole;
use image_classifier::impl_fake::ClassifierLoaderFake;
use image_classifier::loader::ClassifierHandle;
use logger::impl_console::LoggerConsole;
use logger::interface::Logger;
use preferences::impl_memory::PreferencesMemory;
use std::sync::{Arc, Mutex};

mod app;
#[cfg(test)]
mod app_test;
mod cache;
mod config;
mod decision;
mod device_camera;
mod device_display;
mod image_classifier;
mod logger;
mod preferences;
mod stats;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let cache_storage = Arc::new(CacheStorageMemory::new());

    // With a deployment base URL on the command line, assets come over
    // HTTP; otherwise a fake network serves the manifest locally.
    let fetcher: Arc<dyn Fetcher> = match std::env::args().nth(1) {
        Some(base_url) => Arc::new(FetcherHttp::new(&base_url)?),
        None => {
            let fake = Arc::new(FetcherFake::new(logger.clone()));
            fake.serve_assets(&config.manifest.assets);
            fake
        }
    };

    let cache_manager = CacheManager::new(
        cache_storage,
        fetcher,
        config.manifest.clone(),
        logger.clone(),
    );
    cache_manager.install()?;
    cache_manager.activate()?;

    let device_camera = Arc::new(DeviceCameraFake::new(logger.clone()));
    let device_display = Arc::new(Mutex::new(DeviceDisplayConsole::new()));

    let loader = Arc::new(ClassifierLoaderFake::new(logger.clone()));
    let classifier = ClassifierHandle::new(loader, config.classifier.clone(), logger.clone());

    let engine = DecisionEngine::new(
        Box::new(SubstringMatcher),
        config.recyclable_keywords.clone(),
        config.trash_keywords.clone(),
        config.recyclable_margin,
    );

    let preferences = Arc::new(PreferencesMemory::new());

    let app = App::new(
        config,
        logger,
        device_camera,
        device_display,
        classifier,
        engine,
        preferences,
    );

    // Enter stops the capture loop at its next scheduled pass.
    let stop = app.stop_signal();
    std::thread::spawn(move || {
        let mut line = String::new();
        let _ = std::io::stdin().read_line(&mut line);
        stop.store(true, std::sync::atomic::Ordering::SeqCst);
    });

    app.start()?;

    Ok(())
}
