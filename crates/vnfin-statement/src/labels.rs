//! Built-in label tables for the VNDirect statement taxonomy.
//!
//! Each table maps a numbered provider label (after outline numbering) to the
//! canonical label of the entity class it belongs to. Keys are matched exactly,
//! including any trailing whitespace the provider emits.

/// Bank balance sheet.
pub(crate) const BANK_BALANCE_SHEET: &[(&str, &str)] = &[
    ("a. Góp vốn liên doanh", " - Góp vốn liên doanh"),
    ("b. Đầu tư vào công ty liên kết", " - Đầu tư vào công ty liên kết"),
    ("a. Nguyên giá TSCĐHH", " - Nguyên giá TSCĐHH"),
    ("b. Hao mòn TSCĐHH", " - Hao mòn TSCĐHH"),
    ("a. Nguyên giá TSCĐTTC", " - Nguyên giá TSCĐTTC"),
    ("b. Hao mòn TSCĐTTC", " - Hao mòn TSCĐTTC"),
    ("a. Nguyên giá TSCĐVH", " - Nguyên giá TSCĐVH"),
    ("b. Hao mòn TSCĐVH", " - Hao mòn TSCĐVH"),
    ("a. Trong đó: Lợi thế thương mại", " - Trong đó: Lợi thế thương mại"),
    ("A. TỔNG CỘNG TÀI SẢN", "A. Tổng cộng tài sản (I + ... + XII)"),
    ("II. Các khoản nợ Chính phủ và NHNN", "I. Các khoản nợ Chính phủ và NHNN"),
    ("III. Tiền gửi và vay các TCTD khác", "II. Tiền gửi và vay các TCTD khác"),
    ("IV. Tiền gửi của khách hàng", "III. Tiền gửi của khách hàng"),
    (
        "V. Các công cụ tài chính phái sinh và các khoản nợ tài chính khác",
        "IV. Các công cụ tài chính phái sinh và các khoản nợ tài chính khác",
    ),
    (
        "VI. Vốn tài trợ, uỷ thác đầu tư, cho vay TCTD chịu rủi ro",
        "V. Vốn tài trợ, uỷ thác đầu tư, cho vay TCTD chịu rủi ro",
    ),
    ("VII. Phát hành giấy tờ có giá", "VI. Phát hành giấy tờ có giá"),
    ("VIII. Các khoản nợ khác", "VII. Các khoản nợ khác"),
    ("I. Nợ phải trả", "C. Tổng nợ phải trả"),
    ("X. Vốn và các quỹ", "VIII. Vốn và các quỹ"),
    ("XI. Các Quỹ", "IX. Các Quỹ"),
    ("XII. Chênh lệch tỷ giá hối đoái", "X. Chênh lệch tỷ giá hối đoái   "),
    ("XIII. Chênh lệch đánh giá lại tài sản", "XI. Chênh lệch đánh giá lại tài sản"),
    ("XIV. Lợi nhuận sau thuế chưa phân phối", "XII. Lợi nhuận sau thuế chưa phân phối"),
    ("XV. Lợi ích cổ đông không kiểm soát", "XIII. Lợi ích cổ đông không kiểm soát"),
    (
        "XVI. Lợi ích của cổ đông không kiểm soát (trước 2015)",
        "XIV. Lợi ích của cổ đông không kiểm soát (trước 2015)",
    ),
    ("IX. Vốn chủ sở hữu", "D. Tổng vốn chủ sở hữu"),
    ("B. TỔNG CỘNG NGUỒN VỐN", "B. Tổng cộng nguồn vốn (C + D)"),
    ("C. Nghĩa vụ nợ tiềm ẩn", "E. Nghĩa vụ nợ tiềm ẩn"),
    ("D. Cam kết tín dụng", "F. Cam kết tín dụng"),
];

/// Bank income statement.
pub(crate) const BANK_INCOME_STATEMENT: &[(&str, &str)] = &[
    ("1. Thu nhập từ hoạt động dịch vụ", "3. Thu nhập từ hoạt động dịch vụ"),
    ("2. Chi phí hoạt động dịch vụ", "4. Chi phí hoạt động dịch vụ"),
    ("VIII. Tổng thu nhập hoạt động", "Tổng thu nhập hoạt động"),
    ("IX. Chi phí quản lý doanh nghiệp", "VIII. Chi phí quản lý doanh nghiệp"),
    (
        "X. Lợi nhuận thuần từ hoạt động kinh doanh trước chi phí dự phòng rủi ro tín dụng",
        "IX. Lợi nhuận thuần từ hoạt động kinh doanh trước chi phí dự phòng rủi ro tín dụng",
    ),
    ("XI. Chi phí dự phòng rủi ro tín dụng", "X. Chi phí dự phòng rủi ro tín dụng"),
    ("XII. Lợi nhuận kế toán trước thuế", "XI. Lợi nhuận kế toán trước thuế"),
    ("XIII. Chi phí thuế TNDN", "XII. Chi phí thuế TNDN"),
    (
        "XIV. Lợi nhuận sau thuế thu nhập doanh nghiệp",
        "XIII. Lợi nhuận sau thuế thu nhập doanh nghiệp",
    ),
    ("XV. Lợi ích của cổ đông thiểu số", "XIV. Lợi ích của cổ đông thiểu số"),
    ("XVI. Lợi nhuận sau thuế của Công ty mẹ", "XV. Lợi nhuận sau thuế của Công ty mẹ"),
    ("XVII. Lãi cơ bản trên cổ phiếu", "XVI. Lãi cơ bản trên cổ phiếu"),
];

/// Bank cash-flow statement.
pub(crate) const BANK_CASH_FLOW: &[(&str, &str)] = &[
    (
        "A. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - GIÁN TIẾP",
        "I. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - GIÁN TIẾP",
    ),
    ("I. Lợi nhuận kế toán trước thuế", "1. Lợi nhuận kế toán trước thuế"),
    ("B. Điều chỉnh cho các khoản", "2. Điều chỉnh cho các khoản"),
    ("I. Chi phí khấu hao tài sản cố định", " - Chi phí khấu hao tài sản cố định"),
    (
        "II. Dự phòng rủi ro tín dụng, Giảm giá, đầu tư trích thêm,/(hoàn nhập) trong năm",
        " - Dự phòng rủi ro tín dụng, Giảm giá, đầu tư trích thêm,/(hoàn nhập) trong năm",
    ),
    (
        "III. Lãi và phí phải thu trong kì (thực tế chưa thu) (*)",
        " - Lãi và phí phải thu trong kì (thực tế chưa thu) (*)",
    ),
    (
        "IV. Lãi và phí phải trả trong kì (Thực tế chưa trả)",
        " - Lãi và phí phải trả trong kì (Thực tế chưa trả)",
    ),
    ("V. Lãi lỗ do thanh lý TSCĐ", " - Lãi lỗ do thanh lý TSCĐ"),
    (
        "VI. Lãi lỗ do việc bán, thanh lý bất động sản",
        " - Lãi lỗ do việc bán, thanh lý bất động sản",
    ),
    (
        "VII. Lãi lỗ do đầu tư vào đơn vị khác, cổ tức nhận được từ hoạt động đầu tư",
        " - Lãi lỗ do đầu tư vào đơn vị khác, cổ tức nhận được từ hoạt động đầu tư",
    ),
    (
        "VIII. Chênh lệch tỷ giá hối đoái chưa thực hiện",
        " - Chênh lệch tỷ giá hối đoái chưa thực hiện",
    ),
    ("IX. Các khoản điều chỉnh khác", " - Các khoản điều chỉnh khác"),
    (
        "B. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - TRỰC TIẾP",
        "II. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - TRỰC TIẾP",
    ),
    (
        "I. Thu nhập lãi và các khoản thu nhập tương tự",
        "1. Thu nhập lãi và các khoản thu nhập tương tự",
    ),
    (
        "II. Chi phí lãi và các chi phí tương tự đã trả",
        "2. Chi phí lãi và các chi phí tương tự đã trả",
    ),
    ("III. Thu nhập từ hoạt động dịch vụ nhận được", "3. Thu nhập từ hoạt động dịch vụ nhận được"),
    (
        "IV. Chênh lệch số tiền thực thu/thực chi từ hoạt động kinh doanh (vàng bạc, ngoại tệ, v.v…)",
        "4. Chênh lệch số tiền thực thu/thực chi từ hoạt động kinh doanh (vàng bạc, ngoại tệ, v.v…)",
    ),
    (
        "V. Thu nhập từ hoạt động kinh doanh ngoại hối",
        "5. Thu nhập từ hoạt động kinh doanh ngoại hối",
    ),
    (
        "VI. Thu nhập từ hoạt động kinh doanh chứng khoán",
        "6. Thu nhập từ hoạt động kinh doanh chứng khoán",
    ),
    ("VII. Thu nhập khác", "7. Thu nhập khác"),
    (
        "VIII. Tiền thu các khoản nợ đã được xử lý xoá,bù đắp bằng nguồn rủi ro",
        "8. Tiền thu các khoản nợ đã được xử lý xoá,bù đắp bằng nguồn rủi ro",
    ),
    (
        "IX. Tiền chi trả cho nhân viên và hoạt động quản lý, công vụ (*)",
        "9. Tiền chi trả cho nhân viên và hoạt động quản lý, công vụ (*)",
    ),
    ("X. Tiền thuế thu nhập thực nộp trong kỳ (*)", "10. Tiền thuế thu nhập thực nộp trong kỳ (*)"),
    (
        "C. Lưu chuyển tiền thuần từ hoạt động kinh doanh trước những thay đổi về TS & vốn lưu động",
        "3. Lưu chuyển tiền thuần từ hoạt động kinh doanh trước những thay đổi về TS & vốn lưu động",
    ),
    (
        "D. Những thay đổi về tài sản và công nợ hoạt động",
        "Những thay đổi về tài sản và công nợ hoạt động",
    ),
    ("I. Những thay đổi về tài sản hoạt động", "A. Những thay đổi về tài sản hoạt động"),
    (
        "1. Tăng/ (Giảm) tiền gửi dự trữ bắt buộc tại NHNN",
        " - Tăng/ (Giảm) tiền gửi dự trữ bắt buộc tại NHNN",
    ),
    (
        "2. Tăng/ (Giảm) các khoản tiền gửi, tiền vay các tổ chức tín dụng khác",
        " - Tăng/ (Giảm) các khoản tiền gửi, tiền vay các tổ chức tín dụng khác",
    ),
    ("3. Tăng/ (Giảm) chứng khoán kinh doanh", " - Tăng/ (Giảm) chứng khoán kinh doanh"),
    (
        "4. Tăng/ (Giảm) các công cụ tài chính phái sinh và các tài sản tài chính khác",
        " - Tăng/ (Giảm) các công cụ tài chính phái sinh và các tài sản tài chính khác",
    ),
    (
        "5. Tăng/ (Giảm) các khoản cho vay, ứng trước khách hàng",
        " - Tăng/ (Giảm) các khoản cho vay, ứng trước khách hàng",
    ),
    ("6. Tăng)/Giảm lãi, phí phải thu", " - Tăng)/Giảm lãi, phí phải thu"),
    (
        "7. Giảm/ (Tăng) nguồn dự phòng để bù đắp tổn thất các khoản",
        " - Giảm/ (Tăng) nguồn dự phòng để bù đắp tổn thất các khoản",
    ),
    ("8. Tăng/ (Giảm) khác về tài sản hoạt động", " - Tăng/ (Giảm) khác về tài sản hoạt động"),
    ("II. Những thay đổi về công nợ hoạt động", "B. Những thay đổi về công nợ hoạt động"),
    ("1. Tăng/ (Giảm) các khoản tiền vay NHNN", " - Tăng/ (Giảm) các khoản tiền vay NHNN"),
    (
        "2. Tăng/ (Giảm) các khoản tiền gửi, tiền vay các tổ chức tín dụng",
        " - Tăng/ (Giảm) các khoản tiền gửi, tiền vay các tổ chức tín dụng",
    ),
    (
        "3. Tăng/ (Giảm) tiền gửi của khách hàng (bao gồm cả Kho bạc Nhà nước)",
        " - Tăng/ (Giảm) tiền gửi của khách hàng (bao gồm cả Kho bạc Nhà nước)",
    ),
    (
        "4. Tăng/ (Giảm) các công cụ tài chính phái sinh và các khoản nợ tài chính khác",
        " - Tăng/ (Giảm) các công cụ tài chính phái sinh và các khoản nợ tài chính khác",
    ),
    (
        "5. Tăng/ (Giảm) vốn tài trợ, uỷ thác đầu tư, cho vay mà TCTD chịu rủi ro",
        " - Tăng/ (Giảm) vốn tài trợ, uỷ thác đầu tư, cho vay mà TCTD chịu rủi ro",
    ),
    (
        "6. Tăng/ (Giảm) phát hành GTCG (ngoại trừ GTCG phát hành được tính vào hoạt động tài chính)",
        " - Tăng/ (Giảm) phát hành GTCG (ngoại trừ GTCG phát hành được tính vào hoạt động tài chính)",
    ),
    ("7. Tăng/ (Giảm) lãi, phí phải trả", " - Tăng/ (Giảm) lãi, phí phải trả"),
    ("8. Tăng/ (Giảm) khác về công nợ hoạt động", " - Tăng/ (Giảm) khác về công nợ hoạt động"),
    (
        "A. Lưu chuyển tiền tệ thuần từ hoạt động kinh doanh trước thuế thu nhập",
        "4. Lưu chuyển tiền tệ thuần từ hoạt động kinh doanh trước thuế thu nhập",
    ),
    ("I. Thuế TNDN đã nộp (*)", " - Thuế TNDN đã nộp (*)"),
    ("II. Chi từ các quỹ của TCTD (*)", " - Chi từ các quỹ của TCTD (*)"),
    ("III. Thu được từ nợ khó đòi", " - Thu được từ nợ khó đòi"),
    (
        "C. Lưu chuyển tiền thuần từ hoạt động kinh doanh",
        "Lưu chuyển tiền thuần từ hoạt động kinh doanh",
    ),
    ("D. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG ĐẦU TƯ", "III. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG ĐẦU TƯ"),
    ("I. Mua sắm TSCĐ", "1. Mua sắm TSCĐ"),
    (
        "II. Tiền thu từ thanh lý, nhượng bán TSCĐ và các tài sản dài hạn khác",
        "2. Tiền thu từ thanh lý, nhượng bán TSCĐ và các tài sản dài hạn khác",
    ),
    ("III. Tiền chi từ thanh lý, nhượng bán TSCĐ", "3. Tiền chi từ thanh lý, nhượng bán TSCĐ"),
    ("IV. Mua sắm bất động sản đầu tư", "4. Mua sắm bất động sản đầu tư"),
    (
        "V. Tiền thu từ bán, thanh lý bất động sản đầu tư",
        "5. Tiền thu từ bán, thanh lý bất động sản đầu tư",
    ),
    (
        "VI. Tiền chi ra do bán, thanh lý bất động sản đầu tư",
        "6. Tiền chi ra do bán, thanh lý bất động sản đầu tư",
    ),
    ("VII. Tiền chi đầu tư góp vốn vào đơn vị khác", "7. Tiền chi đầu tư góp vốn vào đơn vị khác"),
    (
        "VIII. Tiền thu hồi đầu tư góp vốn vào đơn vị khác",
        "8. Tiền thu hồi đầu tư góp vốn vào đơn vị khác",
    ),
    (
        "IX. Tiền thu lãi cho vay, cổ tức và lợi nhuận được chia",
        "9. Tiền thu lãi cho vay, cổ tức và lợi nhuận được chia",
    ),
    (
        "A. Lưu chuyển tiền thuần từ hoạt động đầu tư",
        "5. Lưu chuyển tiền thuần từ hoạt động đầu tư",
    ),
    ("B. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG TÀI CHÍNH", "IV. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG TÀI CHÍNH"),
    (
        "I. Tiền thu từ phát hành cổ phiếu, nhận vốn góp của chủ sở hữu",
        "1. Tiền thu từ phát hành cổ phiếu, nhận vốn góp của chủ sở hữu",
    ),
    (
        "II. Tiền thu từ PH GTCG dài hạn có đủ đk tính vào vốn tự có & các khoản vốn vay dài hạn khác",
        "2. Tiền thu từ PH GTCG dài hạn có đủ đk tính vào vốn tự có & các khoản vốn vay dài hạn khác",
    ),
    (
        "III. Tiền chi từ PH GTCG dài hạn có đủ đk tính vào vốn tự có & các khoản vốn vay dài hạn khác",
        "3. Tiền chi từ PH GTCG dài hạn có đủ đk tính vào vốn tự có & các khoản vốn vay dài hạn khác",
    ),
    ("IV. Cổ tức, lợi nhuận đã trả cho chủ sở hữu", "4. Cổ tức, lợi nhuận đã trả cho chủ sở hữu"),
    (
        "V. Tiền chi trả vốn góp cho các chủ sở hữu, mua lại cổ phiếu của doanh nghiệp đã phát hành",
        "5. Tiền chi trả vốn góp cho các chủ sở hữu, mua lại cổ phiếu của doanh nghiệp đã phát hành",
    ),
    (
        "VI. Tiền thu được do bán/mua cổ phiếu ngân quỹ",
        "6. Tiền thu được do bán/mua cổ phiếu ngân quỹ",
    ),
    (
        "C. Lưu chuyển tiền thuần từ hoạt động tài chính",
        "7. Lưu chuyển tiền thuần từ hoạt động tài chính",
    ),
    ("D. Lưu chuyển tiền thuần trong kỳ", "Lưu chuyển tiền thuần trong kỳ"),
    ("A. Tiền và tương đương tiền đầu kỳ", "Tiền và tương đương tiền đầu kỳ"),
    (
        "B. Ảnh hưởng của thay đổi tỷ giá hối đoái quy đổi ngoại tệ",
        "Ảnh hưởng của thay đổi tỷ giá hối đoái quy đổi ngoại tệ",
    ),
    ("C. Tiền và tương đương tiền cuối kỳ", "Tiền và tương đương tiền cuối kỳ"),
];

/// General-enterprise balance sheet.
pub(crate) const ENTERPRISE_BALANCE_SHEET: &[(&str, &str)] = &[
    ("I. Tài sản ngắn hạn", "A. Tổng tài sản ngắn hạn (I + II + II + IV + V)"),
    ("1. Tiền và các khoản tương đương tiền", "I. Tiền và các khoản tương đương tiền"),
    ("a. Tiền", "1. Tiền"),
    ("b. Các khoản tương đương tiền", "2. Các khoản tương đương tiền"),
    ("2. Các khoản đầu tư tài chính ngắn hạn", "II. Đầu tư tài chính ngắn hạn"),
    ("a. Đầu tư ngắn hạn", "1. Chứng khoán kinh doanh"),
    ("b. Dự phòng giảm giá đầu tư ngắn hạn", "2. Dự phòng giảm giá chứng khoán kinh doanh (*)"),
    ("c. Đầu tư giữ đến ngày đáo hạn", "3. Đầu tư nắm giữ đến ngày đáo hạn"),
    ("3. Các khoản phải thu ngắn hạn", "III. Các khoản phải thu ngắn hạn"),
    ("a. Phải thu khách hàng", "1. Phải thu ngắn hạn của khách hàng"),
    ("b. Trả trước cho người bán", "2. Trả trước cho người bán ngắn hạn"),
    ("c. Phải thu nội bộ ngắn hạn", "3. Phải thu nội bộ ngắn hạn"),
    (
        "d. Phải thu theo tiến độ kế hoạch hợp đồng xây dựng",
        "4. Phải thu theo tiến độ kế hoạch hợp đồng xây dựng",
    ),
    ("e. Phải thu về cho vay ngắn hạn", "5. Phải thu về cho vay ngắn hạn"),
    ("f. Các khoản phải thu khác", "6. Phải thu ngắn hạn khác"),
    (
        "g. Dự phòng phải thu ngắn hạn khó đòi",
        "7. Dự phòng các khoản phải thu ngắn hạn khó đòi (*)",
    ),
    ("h. Tài sản thiếu chờ xử lý", "8. Tài sản thiếu chờ xử lý"),
    ("4. Hàng tồn kho", "IV. Hàng tồn kho"),
    ("a. Hàng tồn kho", "1. Hàng tồn kho"),
    ("b. Dự phòng giảm giá hàng tồn kho", "2. Dự phòng giảm giá hàng tồn kho (*)"),
    ("5. Tài sản ngắn hạn khác", "V. Tài sản ngắn hạn khác"),
    ("a. Chi phí trả trước ngắn hạn", "1. Chi phi trả trước ngắn hạn"),
    ("b. Thuế GTGT được khấu trừ", "2. Thuế giá trị gia tăng được khấu trừ"),
    ("c. Thuế và các khoản khác phải thu Nhà nước", "3. Thuế và các khoản khác phải thu Nhà nước"),
    (
        "d. Giao dịch mua bán lại trái phiếu chính phủ",
        "4. Giao dịch mua bán lại trái phiếu Chính phủ",
    ),
    ("e. Tài sản ngắn hạn khác", "5. Tài sản ngắn hạn khác"),
    ("II. Tài sản dài hạn", "B. Tổng tài sản dài hạn (I + II + II + IV + V + VI + VII)"),
    ("1. Các khoản phải thu dài hạn", "I. Các khoản phải thu dài hạn"),
    ("a. Phải thu dài hạn của khách hàng", "1. Phải thu dài hạn của khách hàng"),
    ("b. Trả trước dài hạn người bán", "2. Trả trước cho người bán dài hạn"),
    ("c. Vốn kinh doanh ở đơn vị trực thuộc", "3. Vốn kinh doanh ở đơn vị trực thuộc"),
    ("d. Phải thu dài hạn nội bộ", "4. Phải thu nội bộ dài hạn"),
    ("e. Phải thu về cho vay dài hạn", "5. Phải thu về cho vay dài hạn"),
    ("f. Phải thu dài hạn khác", "6. Phải thu dài hạn khác"),
    ("g. Dự phòng phải thu dài hạn khó đòi", "7. Dự phòng phải thu dài hạn khó đòi (*)"),
    ("2. Tài sản cố định", "II. Tài sản cố định"),
    ("a. Tài sản cố định hữu hình", "1. Tài sản cố định hữu hình"),
    ("b. Tài sản cố định thuê tài chính", "2. Tài sản cố định thuê tài chính"),
    ("c. Tài sản cố định vô hình", "3. Tài sản cố định vô hình"),
    (
        "d. Chi phí xây dựng cơ bản dở dang (trước 2015)",
        "4. Chi phí xây dựng cơ bản dở dang (trước 2015)",
    ),
    ("3. Bất động sản đầu tư", "III. Bất động sản đầu tư"),
    ("a. Nguyên giá bất động sản đầu tư", "1. Nguyên giá"),
    ("b. Hao mòn bất động sản đầu tư", "2. Giá trị hao mòn lũy kế (*)"),
    ("4. Tài sản dở dang dài hạn", "IV. Tài sản dở dang dài hạn"),
    (
        "a. Chi phí sản xuất, kinh doanh dở dang dài hạn",
        "1. Chi phí sản xuất, kinh doanh dở dang dài hạn",
    ),
    ("b. Chi phí xây dựng cơ bản dở dang ", "2. Chi phí xây dựng cơ bản dở dang"),
    ("5. Các khoản đầu tư tài chính dài hạn", "V. Đầu tư tài chính dài hạn"),
    ("a. Đầu tư vào công ty con", "1. Đầu tư vào công ty con"),
    ("b. Đầu tư vào công ty liên kết, liên doanh", "2. Đầu tư vào công ty liên doanh, liên kết"),
    ("c. Đầu tư dài hạn khác", "3. Đầu tư góp vốn vào đơn vị khác"),
    ("d. Dự phòng giảm giá đầu tư tài chính dài hạn", "4. Dự phòng đầu tư tài chính dài hạn (*)"),
    ("e. Đầu tư dài hạn giữ đến ngày đáo hạn", "5. Đầu tư nắm giữ đến ngày đáo hạn"),
    ("6. Tài sản dài hạn khác", "VI. Tài sản dài hạn khác"),
    ("a. Chi phí trả trước dài hạn", "1. Chi phí trả trước dài hạn"),
    ("b. Tài sản thuế thu nhập hoãn lại", "2. Tài sản thuế thu nhập hoãn lại"),
    (
        "c. Thiết bị, vật tư, phụ tùng thay thế dài hạn",
        "3. Thiết bị, vật tư, phụ tùng thay thế dài hạn",
    ),
    ("d. Tài sản dài hạn khác", "4. Tài sản dài hạn khác"),
    ("e. Lợi thế thương mại", "5. Lợi thế thương mại"),
    ("7. Lợi thế thương mại (trước 2015)", "VII. Lợi thế thương mại (trước 2015)"),
    ("A. TỔNG CỘNG TÀI SẢN", "Tổng cộng tài sản (A + B)"),
    ("I. Nợ phải trả", "C. Tổng nợ phải trả (I + II)"),
    ("1. Nợ ngắn hạn", "I. Nợ ngắn hạn"),
    ("a. Vay và nợ ngắn hạn", "1. Vay và nợ ngắn hạn"),
    ("b. Phải trả người bán", "2. Phải trả người bán"),
    ("c. Người mua trả tiền trước", "3. Người mua trả tiền trước"),
    ("d. Thuế và các khoản phải nộp Nhà nước", "4. Thuế và các khoản phải nộp Nhà nước"),
    ("e. Phải trả người lao động", "5. Phải trả người lao động"),
    ("f. Chi phí phải trả", "6. Chi phí phải trả"),
    ("g. Phải trả nội bộ", "7. Phải trả nội bộ"),
    (
        "h. Phải trả theo tiến độ kế hoạch hợp đồng xây dựng",
        "8. Phải trả theo tiến độ kế hoạch hợp đồng xây dựng",
    ),
    (
        "i. Các khoản phải trả, phải nộp ngắn hạn khác",
        "9. Các khoản phải trả, phải nộp ngắn hạn khác",
    ),
    ("j. Quỹ khen thưởng, phúc lợi", "10. Quỹ khen thưởng, phúc lợi"),
    ("k. Doanh thu chưa thực hiện ngắn hạn", "11. Doanh thu chưa thực hiện ngắn hạn"),
    ("l. Dự phòng phải trả ngắn hạn", "12. Dự phòng phải trả ngắn hạn"),
    ("m. Quỹ bình ổn giá", "13. Quỹ bình ổn giá"),
    (
        "n. Giao dịch mua bán lại trái phiếu chính phủ",
        "14. Giao dịch mua bán lại trái phiếu chính phủ",
    ),
    ("2. Nợ dài hạn", "II. Nợ dài hạn"),
    ("a. Phải trả dài hạn người bán", "1. Phải trả dài hạn người bán"),
    ("b. Người mua trả trước dài hạn", "2. Người mua trả trước dài hạn"),
    ("c. Chi phí phải trả dài hạn", "3. Chi phí phải trả dài hạn"),
    ("d. Phải trả nội bộ về vốn kinh doanh", "4. Phải trả nội bộ về vốn kinh doanh"),
    ("e. Phải trả dài hạn nội bộ", "5. Phải trả dài hạn nội bộ"),
    ("f. Phải trả dài hạn khác", "6. Phải trả dài hạn khác"),
    ("g. Vay và nợ dài hạn", "7. Vay và nợ dài hạn"),
    ("h. Trái phiếu chuyển đổi", "8. Trái phiếu chuyển đổi"),
    ("i. Cổ phiếu ưu đãi", "9. Cổ phiếu ưu đãi"),
    ("j. Thuế thu nhập hoãn lại phải trả", "10. Thuế thu nhập hoãn lại phải trả"),
    ("k. Dự phòng trợ cấp mất việc làm", "11. Dự phòng trợ cấp mất việc làm"),
    ("l. Doanh thu chưa thực hiện dài hạn", "12. Doanh thu chưa thực hiện dài hạn"),
    ("m. Quỹ phát triển khoa học và công nghệ", "13. Quỹ phát triển khoa học và công nghệ"),
    ("n. Dự phòng phải trả dài hạn", "14. Dự phòng phải trả dài hạn"),
    ("II. Vốn chủ sở hữu", "D. Tổng vốn chủ sở hữu (I + II + III)"),
    ("1. Vốn và các quỹ", "I. Vốn và các quỹ"),
    ("a. Vốn góp", "1. Vốn góp"),
    ("b. Thặng dư vốn cổ phần", "2. Thặng dư vốn cổ phần"),
    ("c. Quyền chọn chuyển đổi trái phiếu", "3. Quyền chọn chuyển đổi trái phiếu"),
    ("d. Vốn khác của chủ sở hữu", "4. Vốn khác của chủ sở hữu"),
    ("e. Cổ phiếu quỹ", "5. Cổ phiếu quỹ"),
    ("f. Chênh lệch đánh giá lại tài sản", "6. Chênh lệch đánh giá lại tài sản"),
    ("g. Chênh lệch tỷ giá hối đoái", "7. Chênh lệch tỷ giá hối đoái"),
    ("h. Quỹ đầu tư phát triển", "8. Quỹ đầu tư phát triển"),
    ("i. Quỹ dự phòng tài chính", "9. Quỹ dự phòng tài chính"),
    ("j. Quỹ khác thuộc vốn chủ sở hữu", "10. Quỹ khác thuộc vốn chủ sở hữu"),
    ("k. Lợi nhuận sau thuế chưa phân phối", "11. Lợi nhuận sau thuế chưa phân phối"),
    ("l. Lợi ích cổ đông không kiểm soát", "12. Lợi ích cổ đông không kiểm soát"),
    ("m. Quỹ hỗ trợ sắp xếp doanh nghiệp", "13. Quỹ hỗ trợ sắp xếp doanh nghiệp"),
    ("n. Nguồn vốn đầu tư XDCB", "14. Nguồn vốn đầu tư XDCB"),
    ("2. Nguồn kinh phí và quỹ khác", "II. Nguồn kinh phí và quỹ khác"),
    ("a. Quỹ khen thưởng, phúc lợi (trước 2010)", "1. Quỹ khen thưởng, phúc lợi (trước 2010)"),
    ("b. Vốn ngân sách nhà nước", "2. Vốn ngân sách nhà nước"),
    ("c. Nguồn kinh phí đã hình thành TSCĐ", "3. Nguồn kinh phí đã hình thành TSCĐ"),
    (
        "III. Lợi ích của cổ đông không kiểm soát (trước 2015)",
        "III. Lợi ích của cổ đông không kiểm soát (trước 2015)",
    ),
    ("B. TỔNG CỘNG NGUỒN VỐN", "Tổng cộng nguồn vốn (C + D)"),
];

/// General-enterprise income statement.
pub(crate) const ENTERPRISE_INCOME_STATEMENT: &[(&str, &str)] = &[
    ("I. Tổng doanh thu hoạt động kinh doanh", "1. Doanh thu bán hàng và cung cấp dịch vụ"),
    ("II. Các khoản giảm trừ doanh thu", "2. Các khoản giảm trừ doanh thu"),
    ("III. Doanh thu thuần", "3. Doanh thu thuần về bán hàng và cung cấp dịch vụ (1 - 2)"),
    ("IV. Giá vốn hàng bán", "4. Giá vốn hàng bán"),
    ("V. Lợi nhuận gộp", "5. Lợi nhuận gộp về bán hàng và cung cấp dịch vụ (3 - 4)"),
    ("VI. Doanh thu hoạt động tài chính", "6. Doanh thu hoạt động tài chính"),
    ("VII. Chi phí tài chính", "7. Chi phí tài chính"),
    ("1. Trong đó: Chi phí lãi vay", " - Trong đó: Chi phí lãi vay "),
    (
        "VIII. Lợi nhuận hoặc lỗ trong công ty liên kết",
        "8. Lợi nhuận hoặc lỗ trong công ty liên kết",
    ),
    ("IX. Chi phí bán hàng", "9. Chi phí bán hàng"),
    ("X. Chi phí quản lý doanh nghiệp", "10. Chi phí quản lý doanh nghiệp"),
    (
        "XI. Lợi nhuận thuần từ hoạt động kinh doanh",
        "11. Lợi nhuận thuần từ hoạt động kinh doanh [5 + (6 - 7) + 8 - (9 + 10)]",
    ),
    ("XII. Thu nhập khác", "12. Thu nhập khác"),
    ("XIII. Chi phí khác", "13. Chi phí khác"),
    ("XIV. Lợi nhuận khác", "14. Lợi nhuận khác (12 - 13)"),
    (
        "XV. Lợi nhuận hoặc lỗ trong công ty liên kết (trước 2015)",
        "15. Lợi nhuận hoặc lỗ trong công ty liên kết (trước 2015)",
    ),
    ("XVI. Lợi nhuận kế toán trước thuế", "16. Lợi nhuận kế toán trước thuế"),
    ("XVII. Chi phí thuế TNDN", "17. Chi phí thuế TNDN (hiện hành + hoãn lại)"),
    ("1. Chi phí thuế TNDN hiện hành", " - Chi phí thuế TNDN hiện hành"),
    ("2. Chi phí thuế TNDN hoãn lại", " - Chi phí thuế TNDN hoãn lại"),
    (
        "XVIII. Lợi nhuận sau thuế thu nhập doanh nghiệp",
        "18. Lợi nhuận sau thuế thu nhập doanh nghiệp (16 - 17)",
    ),
    ("XIX. Lợi ích của cổ đông thiểu số", "19. Lợi ích của cổ đông thiểu số"),
    ("XX. Lợi nhuận sau thuế của Công ty mẹ", "20. Lợi nhuận sau thuế của Công ty mẹ"),
    ("XXI. Lãi cơ bản trên cổ phiếu", "21. Lãi cơ bản trên cổ phiếu"),
    ("XXII. Lãi suy giảm trên cổ phiếu", "22. Lãi suy giảm trên cổ phiếu"),
];

/// General-enterprise cash-flow statement.
pub(crate) const ENTERPRISE_CASH_FLOW: &[(&str, &str)] = &[
    (
        "A. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - GIÁN TIẾP",
        "I. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - GIÁN TIẾP",
    ),
    ("I. Lợi nhuận kế toán trước thuế", "1. Lợi nhuận kế toán trước thuế"),
    ("B. Điều chỉnh cho các khoản", "2. Điều chỉnh cho các khoản"),
    ("I. Chi phí khấu hao tài sản cố định", " - Chi phí khấu hao tài sản cố định"),
    ("II. Phân bổ lợi thế thương mại", " - Phân bổ lợi thế thương mại"),
    (
        "III. Dự phòng giảm giá các khoản đầu tư ngắn hạn, dài hạn",
        " - Dự phòng giảm giá các khoản đầu tư ngắn hạn, dài hạn",
    ),
    (
        "IV. Lãi, lỗ chênh lệch tỷ giá hối đoái chưa thực hiện",
        " - Lãi, lỗ chênh lệch tỷ giá hối đoái chưa thực hiện",
    ),
    ("V. Lãi/(lỗ) từ thanh lý tài sản cố định", " - Lãi/(lỗ) từ thanh lý tài sản cố định"),
    ("VI. Lãi, lỗ từ hoạt động đầu tư", " - Lãi, lỗ từ hoạt động đầu tư"),
    ("VII. Chi phí lãi vay", " - Chi phí lãi vay"),
    ("VIII. Thu lãi và cổ tức", " - Thu lãi và cổ tức"),
    ("IX. Các khoản điều chỉnh khác", " - Các khoản điều chỉnh khác"),
    (
        "C. Lợi nhuận từ hoạt động kinh doanh trước thay đổi vốn  lưu động",
        "3. Lợi nhuận từ hoạt động kinh doanh trước thay đổi vốn  lưu động",
    ),
    ("I. Tăng, giảm các khoản phải thu", " - Tăng, giảm các khoản phải thu"),
    ("II. Tăng, giảm hàng tồn kho", " - Tăng, giảm hàng tồn kho"),
    (
        "III. Tăng, giảm các khoản phải trả (Không kể lãi vay phải trả, thuế TNDN phải nộp)",
        " - Tăng, giảm các khoản phải trả (Không kể lãi vay phải trả, thuế TNDN phải nộp)",
    ),
    ("IV. Tăng, giảm chi phí trả trước", " - Tăng, giảm chi phí trả trước"),
    ("V. Tăng/ (Giảm) chứng khoán kinh doanh", " - Tăng/ (Giảm) chứng khoán kinh doanh"),
    ("VI. Tiền lãi vay đã trả", " - Tiền lãi vay đã trả"),
    ("VII. Thuế thu nhập doanh nghiệp đã nộp", " - Thuế thu nhập doanh nghiệp đã nộp"),
    ("VIII. Tiền thu khác từ hoạt động kinh doanh", " - Tiền thu khác từ hoạt động kinh doanh"),
    ("IX. Tiền chi khác cho hoạt động kinh doanh", " - Tiền chi khác cho hoạt động kinh doanh"),
    (
        "D. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - TRỰC TIẾP",
        "II. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG KINH DOANH - TRỰC TIẾP",
    ),
    (
        "I. Tiền thu từ bán hàng, cung cấp dịch vụ và doanh thu khác",
        "1. Tiền thu từ bán hàng, cung cấp dịch vụ và doanh thu khác",
    ),
    (
        "II. Tiền chi trả cho người cung cấp hàng hóa và dịch vụ",
        "2. Tiền chi trả cho người cung cấp hàng hóa và dịch vụ",
    ),
    ("III. Tiền chi trả cho người lao động", "3. Tiền chi trả cho người lao động"),
    ("IV. Tiền chi trả lãi vay", "4. Tiền chi trả lãi vay"),
    ("V. Tiền chi nộp thuế thu nhập doanh nghiệp", "5. Tiền chi nộp thuế thu nhập doanh nghiệp"),
    ("VI. Tiền thu khác từ hoạt động kinh doanh", "6. Tiền thu khác từ hoạt động kinh doanh"),
    ("VII. Tiền chi khác cho hoạt động kinh doanh", "7. Tiền chi khác cho hoạt động kinh doanh"),
    (
        "A. Lưu chuyển tiền thuần từ hoạt động kinh doanh",
        "20. Lưu chuyển tiền thuần từ hoạt động kinh doanh",
    ),
    ("B. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG ĐẦU TƯ", "III. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG ĐẦU TƯ"),
    ("I. Mua sắm TSCĐ", "1. Mua sắm TSCĐ"),
    (
        "II. Tiền thu từ thanh lý, nhượng bán TSCĐ và các tài sản dài hạn khác",
        "2. Tiền thu từ thanh lý, nhượng bán TSCĐ và các tài sản dài hạn khác",
    ),
    (
        "III. Tiền chi cho vay, mua các công cụ nợ của đơn vị khác",
        "3. Tiền chi cho vay, mua các công cụ nợ của đơn vị khá",
    ),
    (
        "IV. Tiền thu hồi cho vay, bán lại các công cụ nợ của đơn vị khác",
        "4. Tiền thu hồi cho vay, bán lại các công cụ nợ của đơn vị khác",
    ),
    ("V. Tiền chi đầu tư góp vốn vào đơn vị khác", "5. Tiền chi đầu tư góp vốn vào đơn vị khác"),
    (
        "VI. Tiền thu hồi đầu tư góp vốn vào đơn vị khác",
        "6. Tiền thu hồi đầu tư góp vốn vào đơn vị khác",
    ),
    (
        "VII. Tiền thu lãi cho vay, cổ tức và lợi nhuận được chia",
        "7. Tiền thu lãi cho vay, cổ tức và lợi nhuận được chia",
    ),
    (
        "C. Lưu chuyển tiền thuần từ hoạt động đầu tư",
        "30. Lưu chuyển tiền thuần từ hoạt động đầu tư",
    ),
    ("D. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG TÀI CHÍNH", "IV. LƯU CHUYỂN TIỀN TỪ HOẠT ĐỘNG TÀI CHÍNH"),
    (
        "I. Tiền thu từ phát hành cổ phiếu, nhận vốn góp của chủ sở hữu",
        "1. Tiền thu từ phát hành cổ phiếu, nhận vốn góp của chủ sở hữu",
    ),
    (
        "II. Tiền chi trả vốn góp cho các chủ sở hữu, mua lại cổ phiếu của doanh nghiệp đã phát hành",
        "2. Tiền chi trả vốn góp cho các chủ sở hữu, mua lại cổ phiếu của doanh nghiệp đã phát hành",
    ),
    ("III. Tiền vay ngắn hạn, dài hạn nhận được", "3. Tiền vay ngắn hạn, dài hạn nhận được"),
    ("IV. Tiền chi trả nợ gốc vay", "4. Tiền chi trả nợ gốc vay"),
    ("V. Tiền chi trả nợ thuê tài chính", "5. Tiền chi trả nợ thuê tài chính"),
    ("VI. Cổ tức, lợi nhuận đã trả cho chủ sở hữu", "6. Cổ tức, lợi nhuận đã trả cho chủ sở hữu"),
    ("VII. Tiền lãi đã nhận", "7. Tiền lãi đã nhận"),
    (
        "A. Lưu chuyển tiền thuần từ hoạt động tài chính",
        "40. Lưu chuyển tiền thuần từ hoạt động tài chính",
    ),
    ("B. Lưu chuyển tiền thuần trong kỳ", "50. Lưu chuyển tiền thuần trong kỳ (20 + 30 + 40)"),
    ("C. Tiền và tương đương tiền đầu kỳ", "60. Tiền và tương đương tiền đầu kỳ"),
    (
        "D. Ảnh hưởng của thay đổi tỷ giá hối đoái quy đổi ngoại tệ",
        "61. Ảnh hưởng của thay đổi tỷ giá hối đoái quy đổi ngoại tệ",
    ),
    ("A. Tiền và tương đương tiền cuối kỳ", "Tiền và tương đương tiền cuối kỳ (50 + 60 + 61)"),
];
