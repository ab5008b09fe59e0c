#[cfg(test)]
mod app_test {
    use crate::app::App;
    use crate::config::Config;
    use crate::decision::engine::{DecisionEngine, Verdict};
    use crate::decision::matcher::SubstringMatcher;
    use crate::device_camera::impl_fake::DeviceCameraFake;
    use crate::device_camera::interface::DeviceCamera;
    use crate::device_display::impl_console::DeviceDisplayConsole;
    use crate::image_classifier::impl_fake::ClassifierLoaderFake;
    use crate::image_classifier::interface::Prediction;
    use crate::image_classifier::loader::ClassifierHandle;
    use crate::logger::impl_console::LoggerConsole;
    use crate::logger::interface::Logger;
    use crate::preferences::impl_memory::PreferencesMemory;
    use crate::stats::RecycleStats;
    use std::sync::{Arc, Mutex};

    struct Fixture {
        pub app: App,
        pub camera: Arc<DeviceCameraFake>,
        pub loader: Arc<ClassifierLoaderFake>,
        pub preferences: Arc<PreferencesMemory>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Config::default();
            let logger: Arc<dyn Logger + Send + Sync> =
                Arc::new(LoggerConsole::new(config.logger_timezone));
            let camera = Arc::new(DeviceCameraFake::new(logger.clone()));
            let loader = Arc::new(ClassifierLoaderFake::new(logger.clone()));
            let preferences = Arc::new(PreferencesMemory::new());
            let classifier = ClassifierHandle::new(
                loader.clone(),
                config.classifier.clone(),
                logger.clone(),
            );
            let engine = DecisionEngine::new(
                Box::new(SubstringMatcher),
                config.recyclable_keywords.clone(),
                config.trash_keywords.clone(),
                config.recyclable_margin,
            );
            let app = App::new(
                config,
                logger,
                camera.clone(),
                Arc::new(Mutex::new(DeviceDisplayConsole::new())),
                classifier,
                engine,
                preferences.clone(),
            );

            Self {
                app,
                camera,
                loader,
                preferences,
            }
        }
    }

    fn prediction(label: &str, confidence: f32) -> Prediction {
        Prediction {
            label: label.to_string(),
            confidence,
        }
    }

    #[test]
    fn test_classify_once_records_decision_and_stats() {
        let f = Fixture::new();
        f.camera.start().unwrap();
        f.loader.classifier().set_predictions(vec![
            prediction("beer bottle", 0.9),
            prediction("broccoli", 0.05),
        ]);

        let decision = f.app.classify_once().unwrap();

        assert_eq!(decision.verdict, Verdict::Recyclable);
        assert_eq!(decision.matched.label, "beer bottle");

        let stats = RecycleStats::load(f.preferences.as_ref());
        assert_eq!(stats.total, 1);
        assert_eq!(stats.recycled, 1);
        assert_eq!(stats.trash, 0);
    }

    #[test]
    fn test_classifier_loads_exactly_once() {
        let f = Fixture::new();
        f.camera.start().unwrap();
        f.loader
            .classifier()
            .set_predictions(vec![prediction("banana", 0.8)]);

        f.app.classify_once().unwrap();
        f.app.classify_once().unwrap();

        assert_eq!(f.loader.load_count(), 1);
    }

    #[test]
    fn test_stats_accumulate_across_passes() {
        let f = Fixture::new();
        f.camera.start().unwrap();

        f.loader
            .classifier()
            .set_predictions(vec![prediction("beer bottle", 0.9)]);
        f.app.classify_once().unwrap();

        f.loader
            .classifier()
            .set_predictions(vec![prediction("banana", 0.8)]);
        f.app.classify_once().unwrap();

        let stats = RecycleStats::load(f.preferences.as_ref());
        assert_eq!(stats.total, 2);
        assert_eq!(stats.recycled, 1);
        assert_eq!(stats.trash, 1);
    }

    #[test]
    fn test_capture_failure_surfaces() {
        let f = Fixture::new();
        // Camera never started: capture must fail and no stats recorded.

        assert!(f.app.classify_once().is_err());
        assert_eq!(RecycleStats::load(f.preferences.as_ref()).total, 0);
    }
}
