use crate::state::data::ImageRecord;

/// Sample records shown when the live index cannot be loaded
///
/// Already ordered newest first, like a successful load.
pub fn fallback_records() -> Vec<ImageRecord> {
    vec![
        ImageRecord {
            filename: "0mCHGeTPqzw.c83a0ddc.jpg".to_string(),
            url: "https://cdn.jsdelivr.net/gh/LucienVen/photo-bed@main/images/0mCHGeTPqzw.c83a0ddc.jpg"
                .to_string(),
            thumb_url: "https://cdn.jsdelivr.net/gh/LucienVen/photo-bed@main/images/0mCHGeTPqzw.c83a0ddc.thumb.jpg"
                .to_string(),
            created_at: 1754621331,
            tags: vec!["测试".to_string(), "随机".to_string()],
            desc: "测试图片".to_string(),
            size_kb: 2848.0,
            width: 4000,
            height: 6000,
            hash: "c83a0ddc2f9adc5caf120c3f0f8b9f63a63bb4adf7ad07860e36cafd0a957bcb".to_string(),
            path: String::new(),
        },
        ImageRecord {
            filename: "test2.b9de6437.jpg".to_string(),
            url: "https://cdn.jsdelivr.net/gh/LucienVen/photo-bed@main/images/test2.b9de6437.jpg".to_string(),
            thumb_url: "https://cdn.jsdelivr.net/gh/LucienVen/photo-bed@main/images/test2.b9de6437.thumb.jpg"
                .to_string(),
            created_at: 1754620115,
            tags: vec![String::new()],
            desc: String::new(),
            size_kb: 5174.0,
            width: 4000,
            height: 3000,
            hash: "b9de6437b06a74a2d237939c8706b6d41dd53212aefa75e17891ff85f848f4de".to_string(),
            path: String::new(),
        },
    ]
}
