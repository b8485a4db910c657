/// Maximum number of recipes returned by a recommendation.
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Shown when no ingredient could be detected in the uploaded images.
pub const NO_INGREDIENTS_MESSAGE: &str = "Không phát hiện được nguyên liệu nào trong ảnh.";

/// Shown when no recipe shares a single ingredient with the detection.
pub const NO_MATCH_MESSAGE: &str =
    "Chưa có món phù hợp tuyệt đối, thử thêm nguyên liệu khác nhé!";
