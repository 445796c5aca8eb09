//! File names, directory names and markers shared by the dataset tools.

/// Camera calibration array written by the splatting trainer.
pub const CAMERAS_FILE: &str = "cameras.json";

/// Untouched copy of [`CAMERAS_FILE`] taken before splitting.
pub const CAMERAS_BACKUP_FILE: &str = "cameras_original_backup.json";

/// Train subset of the camera array.
pub const CAMERAS_TRAIN_FILE: &str = "cameras_train.json";

/// Test subset of the camera array.
pub const CAMERAS_TEST_FILE: &str = "cameras_test.json";

/// Field of a camera record holding the image name.
pub const CAMERA_NAME_FIELD: &str = "img_name";

/// Camera names starting with this marker belong to the test set.
pub const CAMERA_TEST_MARKER: &str = "test";

/// Source directory of training images.
pub const TRAIN_DIR: &str = "train";

/// Source directory of test images.
pub const TEST_DIR: &str = "test";

/// Shared destination directory for all images.
pub const IMAGES_DIR: &str = "images";

/// Manifest describing the training frames.
pub const TRAIN_MANIFEST: &str = "transforms_train.json";

/// Manifest describing the test frames.
pub const TEST_MANIFEST: &str = "transforms_test.json";

/// Array of frame records inside a manifest.
pub const FRAMES_FIELD: &str = "frames";

/// Path field of a frame record.
pub const FRAME_PATH_FIELD: &str = "file_path";

/// Prefix given to test images so they never collide with train images.
pub const TEST_IMAGE_PREFIX: &str = "test_";

/// Image extensions (lowercase, without the dot).
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
