//! Embedded District 1 (Ho Chi Minh City) data.
//!
//! A handful of real street names with approximate coordinates, plus a
//! congestion profile covering the Monday morning and evening rush.  Enough
//! to exercise every query without any files on disk.

/// Flat segment table, one row per directed segment.  Segment 104 is
/// repeated the way the bulk export repeats segments per period.
pub const SEGMENTS_CSV: &str = "\
segment_id,street_name,lat_snode,long_snode,lat_enode,long_enode
101,Lê Lợi,10.7725,106.6980,10.7745,106.7010
102,Lê Lợi,10.7745,106.7010,10.7760,106.7035
103,Lê Lợi,10.7760,106.7035,10.7745,106.7010
104,Nguyễn Huệ,10.7740,106.7040,10.7765,106.7025
104,Nguyễn Huệ,10.7740,106.7040,10.7765,106.7025
105,Nguyễn Huệ,10.7765,106.7025,10.7790,106.7010
106,Đồng Khởi,10.7760,106.7035,10.7790,106.7050
107,Đồng Khởi,10.7790,106.7050,10.7815,106.7035
108,Đồng Khởi,10.7815,106.7035,10.7790,106.7050
109,Hai Bà Trưng,10.7790,106.7050,10.7830,106.7000
110,Hai Bà Trưng,10.7830,106.7000,10.7870,106.6950
111,Pasteur,10.7745,106.6985,10.7790,106.6950
112,Pasteur,10.7790,106.6950,10.7830,106.6920
113,Lý Tự Trọng,10.7770,106.6960,10.7790,106.6990
114,Lý Tự Trọng,10.7790,106.6990,10.7815,106.7035
115,Tôn Đức Thắng,10.7735,106.7060,10.7790,106.7070
116,Tôn Đức Thắng,10.7790,106.7070,10.7850,106.7050
117,Tôn Đức Thắng,10.7850,106.7050,10.7900,106.7010
118,Hẻm 42,10.7752,106.7000,10.7758,106.7004
";

/// Congestion profile: `street_name, weekday, hour, los`.  `Hẻm 42` is
/// absent, so the network builder drops it.
pub const PROFILE_CSV: &str = "\
street_name,weekday,hour,los
Lê Lợi,0,7,E
Lê Lợi,0,8,F
Lê Lợi,0,9,D
Lê Lợi,0,17,E
Nguyễn Huệ,0,7,C
Nguyễn Huệ,0,8,D
Nguyễn Huệ,0,9,C
Đồng Khởi,0,7,B
Đồng Khởi,0,8,C
Đồng Khởi,0,9,B
Hai Bà Trưng,0,period_7_00,D
Hai Bà Trưng,0,period_8_00,E
Hai Bà Trưng,0,period_9_00,C
Pasteur,0,7,A
Pasteur,0,8,B
Pasteur,0,9,A
Lý Tự Trọng,0,7,B
Lý Tự Trọng,0,8,A
Lý Tự Trọng,0,9,A
Tôn Đức Thắng,0,7,C
Tôn Đức Thắng,0,8,B
Tôn Đức Thắng,0,9,B
Tôn Đức Thắng,0,17,F
";
